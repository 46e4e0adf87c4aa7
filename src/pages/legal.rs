use chrono::{Datelike, Utc};
use yew::prelude::*;

use crate::components::icons::{Icon, IconView};
use crate::context::use_content;
use crate::navigation::smooth_scroll_to_top;

#[derive(Properties, PartialEq)]
pub struct LegalProps {
    pub on_back: Callback<()>,
}

#[derive(Properties, PartialEq)]
struct LegalLayoutProps {
    title: &'static str,
    on_back: Callback<()>,
    children: Children,
}

/// Fixed back-to-home header, the document body and a back-to-top footer.
#[function_component(LegalLayout)]
fn legal_layout(props: &LegalLayoutProps) -> Html {
    let content = use_content();
    let on_back = props.on_back.reform(|_: MouseEvent| ());
    let to_top = Callback::from(|_: MouseEvent| smooth_scroll_to_top());

    html! {
        <div class="legal-page">
            <style>
                {r#"
                .legal-page {
                    min-height: 100vh;
                    background: white;
                    color: #475569;
                    font-family: var(--font-body);
                }
                .legal-header {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 100%;
                    height: 4rem;
                    display: flex;
                    align-items: center;
                    z-index: 50;
                    background: rgba(255, 255, 255, 0.9);
                    backdrop-filter: blur(12px);
                    border-bottom: 1px solid #f5f5f5;
                }
                .legal-back {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    background: none;
                    border: none;
                    color: #525252;
                    font-weight: 500;
                    font-size: 0.875rem;
                    cursor: pointer;
                    transition: color 0.2s;
                }
                .legal-back:hover {
                    color: var(--color-primary);
                }
                .legal-back-icon {
                    width: 2rem;
                    height: 2rem;
                    border-radius: 9999px;
                    background: #f5f5f5;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    transition: transform 0.3s;
                }
                .legal-back:hover .legal-back-icon {
                    transform: translateX(-4px);
                }
                .legal-body {
                    max-width: 56rem;
                    margin: 0 auto;
                    padding: 10rem 1.5rem 6rem;
                    line-height: 1.7;
                }
                .legal-body h1 {
                    font-family: var(--font-headings);
                    font-weight: 700;
                    color: #0f172a;
                    font-size: 1.875rem;
                    line-height: 1.2;
                    margin: 0 0 2rem;
                }
                .legal-body h2 {
                    font-family: var(--font-headings);
                    font-weight: 700;
                    color: #0f172a;
                    font-size: 1.25rem;
                    margin: 2.5rem 0 1rem;
                }
                .legal-body h3 {
                    font-family: var(--font-headings);
                    font-weight: 700;
                    color: #1e293b;
                    font-size: 1.125rem;
                    margin: 2rem 0 0.75rem;
                }
                .legal-body p {
                    margin: 0 0 1.5rem;
                }
                .legal-body ul {
                    padding-left: 1.25rem;
                    margin: 0 0 1.5rem;
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                }
                .legal-body li::marker {
                    color: var(--color-primary);
                }
                .legal-body a {
                    color: var(--color-primary);
                    font-weight: 500;
                    text-decoration: none;
                }
                .legal-body a:hover {
                    text-decoration: underline;
                }
                .legal-footer {
                    margin-top: 5rem;
                    padding: 2.5rem 0 2rem;
                    border-top: 1px solid #e5e5e5;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 1.5rem;
                }
                .legal-top {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 0.5rem;
                    background: none;
                    border: none;
                    color: #a3a3a3;
                    font-size: 0.875rem;
                    font-weight: 500;
                    cursor: pointer;
                    transition: color 0.2s;
                }
                .legal-top:hover {
                    color: var(--color-primary);
                }
                .legal-top-icon {
                    width: 3rem;
                    height: 3rem;
                    border-radius: 9999px;
                    border: 1px solid #e5e5e5;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    transition: all 0.2s;
                }
                .legal-top:hover .legal-top-icon {
                    background: var(--color-primary);
                    border-color: var(--color-primary);
                    color: white;
                }
                .legal-footer p {
                    color: #a3a3a3;
                    font-size: 0.875rem;
                    margin: 0;
                }
                @media (min-width: 768px) {
                    .legal-header { height: 5rem; }
                    .legal-back { font-size: 1rem; }
                    .legal-back-icon { width: 2.5rem; height: 2.5rem; }
                    .legal-body { padding-top: 9rem; font-size: 1.125rem; }
                    .legal-body h1 { font-size: 3rem; margin-bottom: 3rem; }
                    .legal-body h2 { font-size: 1.5rem; }
                    .legal-body h3 { font-size: 1.25rem; }
                }
                "#}
            </style>
            <header class="legal-header">
                <div class="container">
                    <button class="legal-back" onclick={on_back}>
                        <span class="legal-back-icon"><IconView icon={Icon::ArrowLeft} size={18} /></span>
                        <span>{"Voltar para o Início"}</span>
                    </button>
                </div>
            </header>
            <main class="legal-body">
                <h1>{props.title}</h1>
                { for props.children.iter() }
                <div class="legal-footer">
                    <button class="legal-top" onclick={to_top}>
                        <span class="legal-top-icon"><IconView icon={Icon::ArrowUp} /></span>
                        <span>{"Voltar ao Topo"}</span>
                    </button>
                    <p>{format!("© {} {}. Todos os direitos reservados.", Utc::now().year(), content.infos.name)}</p>
                </div>
            </main>
        </div>
    }
}

#[function_component(PrivacyPolicy)]
pub fn privacy_policy(props: &LegalProps) -> Html {
    let content = use_content();
    let infos = &content.infos;
    let seo = &content.seo;
    let mailto = format!("mailto:{}", infos.email);

    html! {
        <LegalLayout title="Política de Privacidade" on_back={props.on_back.clone()}>
            <p>
                {"Bem-vindo à "}<strong>{&infos.name}</strong>
                {format!(", inscrita no CNPJ {}, com sede na {}. ", infos.cnpj, infos.address)}
                {"Nosso compromisso é com a integridade e a segurança dos dados pessoais dos nossos usuários e clientes. \
                  Esta Política de Privacidade aplica-se a todas as interações digitais realizadas em nosso site "}
                <a href={seo.domain.clone()} target="_blank" rel="noopener noreferrer">{seo.display_domain()}</a>
                {", serviços associados, aplicativos móveis e outras plataformas digitais sob nosso controle."}
            </p>
            <p>
                {"Ao acessar e utilizar nossas plataformas, você reconhece e concorda com as práticas descritas nesta política. \
                  Nós tratamos a proteção de seus dados pessoais com a máxima seriedade e nos comprometemos a processá-los de forma responsável, transparente e segura."}
            </p>

            <h2>{"Definições"}</h2>
            <ul>
                <li><strong>{"“Dados Pessoais”"}</strong>{" são informações que identificam ou podem identificar uma pessoa natural."}</li>
                <li><strong>{"“Dados Pessoais Sensíveis”"}</strong>{" são informações que revelam características pessoais íntimas, como origem racial, convicções religiosas, opiniões políticas, dados genéticos ou biométricos."}</li>
                <li><strong>{"“Tratamento de Dados Pessoais”"}</strong>{" abrange qualquer operação com Dados Pessoais, como coleta, registro, armazenamento, uso, compartilhamento ou destruição."}</li>
                <li><strong>{"“Leis de Proteção de Dados”"}</strong>{" são todas as leis que regulamentam o Tratamento de Dados Pessoais, incluindo a LGPD (Lei Geral de Proteção de Dados Pessoais, Lei nº 13.709/18)."}</li>
            </ul>

            <h2>{"Dados Coletados e Motivos da Coleta"}</h2>
            <p>{"Nós coletamos e processamos os seguintes tipos de dados pessoais:"}</p>
            <ul>
                <li><strong>{"Informações Fornecidas por Você:"}</strong>{" Isso inclui, mas não se limita a, nome, sobrenome, endereço de e-mail, endereço físico, informações de pagamento e quaisquer outras informações que você optar por fornecer ao criar uma conta, fazer uma compra ou interagir com nossos serviços de atendimento ao cliente."}</li>
                <li><strong>{"Informações Coletadas Automaticamente:"}</strong>{" Quando você visita nosso site, coletamos automaticamente informações sobre seu dispositivo e sua interação com nosso site. Isso pode incluir dados como seu endereço IP, tipo de navegador, detalhes do dispositivo, fuso horário, páginas visitadas, produtos visualizados, sites ou termos de busca que o direcionaram ao nosso site, e informações sobre como você interage com nosso site."}</li>
            </ul>

            <h2>{"Uso de Cookies e Tecnologias de Rastreamento"}</h2>
            <p>
                {"A "}<strong>{&infos.name}</strong>
                {format!(" utiliza cookies, que são pequenos arquivos de texto armazenados no seu dispositivo, \
                  e outras tecnologias de rastreamento para melhorar a experiência do usuário em nosso site {}, \
                  entender como nossos serviços são utilizados e otimizar nossas estratégias de marketing.", seo.display_domain())}
            </p>
            <h3>{"Tipos de Cookies Utilizados:"}</h3>
            <ul>
                <li><strong>{"Cookies Essenciais:"}</strong>{" Essenciais para o funcionamento do site, permitindo que você navegue e use suas funcionalidades. Sem esses cookies, serviços como carrinho de compras e processamento de pagamento não podem ser fornecidos."}</li>
                <li><strong>{"Cookies de Desempenho e Analíticos:"}</strong>{" Coletam informações sobre como os visitantes usam o nosso site, quais páginas são visitadas com mais frequência e se eles recebem mensagens de erro. Esses cookies são usados apenas para melhorar o desempenho e a experiência do usuário no site."}</li>
                <li><strong>{"Cookies de Funcionalidade:"}</strong>{" Permitem que o site lembre de escolhas que você faz (como seu nome de usuário, idioma ou a região em que você está) e forneça recursos aprimorados e mais pessoais."}</li>
                <li><strong>{"Cookies de Publicidade e Redes Sociais:"}</strong>{" Usados para oferecer anúncios mais relevantes para você e seus interesses. Eles também são usados para limitar o número de vezes que você vê um anúncio, bem como ajudar a medir a eficácia das campanhas publicitárias."}</li>
            </ul>

            <h2>{"Finalidades do Processamento de Dados"}</h2>
            <p>{"Os dados coletados são utilizados para:"}</p>
            <ul>
                <li>{"Proporcionar, operar e melhorar nossos serviços e ofertas;"}</li>
                <li>{"Processar suas transações e enviar notificações relacionadas a suas compras;"}</li>
                <li>{"Personalizar sua experiência de usuário e recomendar conteúdo ou produtos que possam ser do seu interesse;"}</li>
                <li>{"Comunicar informações importantes, ofertas e promoções, conforme sua preferência de comunicação;"}</li>
                <li>{"Realizar análises internas para desenvolver e aprimorar nossos serviços;"}</li>
                <li>{"Cumprir obrigações legais e regulatórias aplicáveis."}</li>
            </ul>

            <h2>{"Compartilhamento e Transferência de Dados Pessoais"}</h2>
            <p>{"Nós podemos compartilhar seus dados pessoais com terceiros nas seguintes circunstâncias:"}</p>
            <ul>
                <li>{"Com fornecedores de serviços e parceiros que nos auxiliam nas operações de negócio, desde que estes atuem em conformidade com nossas diretrizes de proteção de dados e com a legislação aplicável;"}</li>
                <li>{"Para cumprir com obrigações legais, responder a processos judiciais, ou proteger nossos direitos e propriedades, bem como a segurança de nossos clientes e do público;"}</li>
                <li>{"Em caso de reestruturação corporativa, venda, fusão ou outra transferência de ativos, garantindo que a entidade receptora concorde em respeitar a privacidade de seus dados de acordo com uma política equivalente à nossa."}</li>
            </ul>

            <h2>{"Links para outros sites e redes sociais"}</h2>
            <p>{"Nossa plataforma pode incluir links para sites externos de parceiros, anunciantes e fornecedores. Clicar nesses links implica que você será direcionado para fora do nosso site, entrando em domínios que seguem suas próprias políticas de privacidade, pelas quais não somos responsáveis."}</p>
            <p>{"Recomendamos a leitura atenta dessas políticas antes de fornecer qualquer dado pessoal. Da mesma forma, não assumimos responsabilidade pelas práticas de privacidade de terceiros como Facebook, Apple, Google e Microsoft. Aconselhamos você a se informar sobre as políticas de privacidade dessas entidades ao utilizar seus serviços ou aplicativos."}</p>

            <h2>{"Direitos dos Titulares dos Dados"}</h2>
            <p>{"Você possui diversos direitos em relação aos seus dados pessoais, incluindo:"}</p>
            <ul>
                <li>{"O direito de acesso, retificação ou exclusão de seus dados pessoais sob nossa posse;"}</li>
                <li>{"O direito de limitar ou se opor ao nosso processamento de seus dados;"}</li>
                <li>{"O direito à portabilidade de dados;"}</li>
                <li>{"O direito de retirar seu consentimento a qualquer momento, quando o processamento for baseado em consentimento."}</li>
            </ul>
            <p>
                {"Para exercer esses direitos, entre em contato conosco através de "}
                <a href={mailto.clone()}>{&infos.email}</a>{"."}
            </p>

            <h2>{"Segurança dos Dados"}</h2>
            <p>{"Implementamos medidas de segurança técnica e organizacional para proteger seus dados pessoais contra acesso não autorizado, alteração, divulgação ou destruição. No entanto, é importante notar que nenhum sistema é completamente seguro. Nos comprometemos a notificar você e qualquer autoridade aplicável de quaisquer brechas de segurança de acordo com a legislação vigente."}</p>

            <h2>{"Alterações na Política de Privacidade"}</h2>
            <p>{"Nossa Política de Privacidade pode ser atualizada periodicamente. A versão mais atual será sempre publicada em nosso site, indicando a data da última revisão. Encorajamos você a revisar regularmente nossa política para estar sempre informado sobre como estamos protegendo seus dados."}</p>

            <h2>{"Contato"}</h2>
            <p>
                {"Se tiver dúvidas ou preocupações sobre nossa Política de Privacidade ou práticas de dados, por favor, não hesite em nos contatar em "}
                <a href={mailto}>{&infos.email}</a>
                {". Estamos comprometidos em resolver quaisquer questões relacionadas à privacidade de nossos usuários e clientes."}
            </p>
        </LegalLayout>
    }
}

#[function_component(TermsOfUse)]
pub fn terms_of_use(props: &LegalProps) -> Html {
    let content = use_content();
    let infos = &content.infos;
    let seo = &content.seo;
    let name = html! { <strong>{&infos.name}</strong> };

    html! {
        <LegalLayout title="Termos de Uso e Serviço" on_back={props.on_back.clone()}>
            <p>
                {"Seja Bem-Vindo ao site da "}{name.clone()}
                {". Antes de explorar tudo o que temos a oferecer, é importante que você entenda e concorde com algumas regras básicas que regem o uso do nosso site "}
                <a href={seo.domain.clone()} target="_blank" rel="noopener noreferrer">{seo.display_domain()}</a>
                {", e qualquer outro serviço digital que nós oferecemos, como lojas e plataformas de e-commerce."}
            </p>
            <p>{"Ao usar nosso site e serviços, você automaticamente concorda em seguir as regras que estabelecemos aqui. Caso não concorde com algo, por favor, considere não usar nossos serviços. É muito importante para nós que você se sinta seguro e informado a todo momento."}</p>

            <h2>{"1. Aceitando os Termos"}</h2>
            <p>
                {"Ao navegar e usar o site da "}{name.clone()}
                {", você concorda automaticamente com nossas regras e condições. Estamos sempre procurando melhorar, então esses termos podem mudar de vez em quando. Se fizermos alterações significativas, vamos postar as atualizações aqui no site. Continuar usando o site após essas mudanças significa que você aceita os novos termos."}
            </p>

            <h2>{"2. Como Usar o Nosso Site"}</h2>
            <p>{"A maior parte do nosso site está aberta para você sem a necessidade de cadastro. No entanto, algumas seções especiais podem exigir que você crie uma conta. Pedimos que você seja honesto ao fornecer suas informações e que mantenha sua senha e login seguros. Se decidir compartilhar algum conteúdo conosco, como comentários, por favor, faça-o de maneira respeitosa e dentro da lei."}</p>

            <h2>{"3. Sua Privacidade"}</h2>
            <p>
                {"Na "}{name.clone()}
                {", a privacidade é um valor essencial. Ao interagir com nosso site, você aceita nossa Política de Privacidade, que detalha nossa abordagem responsável e conforme às leis para o manejo dos seus dados pessoais. Nosso compromisso é com a transparência e a segurança: explicamos como coletamos, usamos e protegemos suas informações, garantindo sua privacidade e oferecendo controle sobre seus dados."}
            </p>
            <p>{"Adotamos práticas de segurança para proteger suas informações contra acesso não autorizado e compartilhamento indevido, assegurando que qualquer cooperação com terceiros ocorra apenas com base na sua aprovação ou exigências legais claras, reafirmando nosso comprometimento com a sua confiança e segurança digital."}</p>

            <h2>{"4. Direitos de Conteúdo"}</h2>
            <p>
                {"O conteúdo disponível no site da "}{name.clone()}
                {", incluindo, mas não se limitando a, textos, imagens, ilustrações, designs, ícones, fotografias, programas de computador, videoclipes e áudios, constitui propriedade intelectual protegida tanto pela legislação nacional quanto por tratados internacionais sobre direitos autorais e propriedade industrial. Essa propriedade engloba não apenas materiais diretamente produzidos e publicados por nós, mas também conteúdos que são utilizados sob licença ou permissão de terceiros, garantindo que todos os direitos sejam respeitados conforme as normativas vigentes."}
            </p>
            <p>
                {"Ao acessar nosso site, você recebe uma licença limitada, não exclusiva e revogável para visualizar e usar o conteúdo para fins pessoais e não comerciais. Isso implica que qualquer reprodução, distribuição, transmissão ou modificação do conteúdo, sem a devida autorização escrita da "}{name}
                {", é estritamente proibida. Tal restrição visa proteger os direitos de propriedade intelectual associados aos materiais disponibilizados, assegurando que sua utilização não infrinja os direitos dos criadores ou detentores desses direitos, além de promover um ambiente de respeito e valorização da criatividade e inovação."}
            </p>

            <h2>{"5. Cookies e Mais"}</h2>
            <p>{"Utilizamos cookies para melhorar sua experiência, coletando informações anônimas durante sua visita, como suas preferências de idioma, duração da visita, páginas acessadas, e outras estatísticas de uso. Esses dados nos ajudam a personalizar seu conteúdo, otimizar a navegação, melhorar continuamente o site em design e funcionalidade, e garantir sua segurança online. Esta prática é essencial para nos permitir oferecer um serviço mais ajustado às suas necessidades e resolver qualquer problema que possa surgir mais rapidamente."}</p>
            <p>{"Se você preferir limitar ou recusar o uso de cookies, a configuração pode ser ajustada através do seu navegador. Isso pode afetar a sua experiência no site, pois algumas funcionalidades dependem dos cookies para funcionar corretamente. Entendemos a importância do controle sobre suas informações e queremos que você saiba que, ao ajustar as configurações para bloquear cookies, algumas partes do nosso site podem não oferecer a experiência completa pretendida."}</p>

            <h2>{"6. Explorando Links Externos"}</h2>
            <p>{"Nosso site pode incluir links para sites externos que achamos que podem ser do seu interesse. Note que não temos controle sobre esses sites externos e, portanto, não somos responsáveis pelo seu conteúdo ou políticas."}</p>

            <h2>{"7. Mudanças e Atualizações"}</h2>
            <p>{"A evolução é parte de como operamos, o que significa que estes Termos de Uso podem passar por atualizações para refletir melhor as mudanças em nossos serviços ou na legislação. Sempre que isso acontecer, você encontrará a versão mais recente disponível aqui. Se as mudanças forem significativas, faremos o possível para notificá-lo através dos meios de contato que você nos forneceu."}</p>
            <p>{"Continuar a acessar o site após essas mudanças indica que você concorda com os novos termos. Se, por qualquer motivo, você não concordar com as atualizações, pedimos que não continue utilizando nosso site e serviços."}</p>

            <h2>{"Dúvidas ou Comentários?"}</h2>
            <p>
                {"Se tiver dúvidas sobre estes termos, não hesite em nos contatar através do e-mail "}
                <a href={format!("mailto:{}", infos.email)}>{&infos.email}</a>{"."}
            </p>
        </LegalLayout>
    }
}
