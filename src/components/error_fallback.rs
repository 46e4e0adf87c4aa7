use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorFallbackProps {
    pub message: String,
}

/// Shown instead of the site when its content cannot be loaded.
#[function_component(ErrorFallback)]
pub fn error_fallback(props: &ErrorFallbackProps) -> Html {
    let reload = Callback::from(|_: MouseEvent| {
        if let Some(window) = web_sys::window() {
            let _ = window.location().reload();
        }
    });

    html! {
        <div class="error-fallback">
            <style>
                {r#"
                .error-fallback {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                    padding: 2rem;
                    text-align: center;
                    font-family: Inter, sans-serif;
                    color: #1e293b;
                    background: #f8fafc;
                }
                .error-fallback h1 {
                    font-size: 1.5rem;
                    margin: 0;
                }
                .error-fallback p {
                    color: #64748b;
                    max-width: 32rem;
                }
                .error-fallback code {
                    font-size: 0.75rem;
                    color: #94a3b8;
                }
                .error-fallback button {
                    border: none;
                    border-radius: 0.75rem;
                    padding: 0.75rem 2rem;
                    background: #0ea5e9;
                    color: white;
                    font-weight: 700;
                    cursor: pointer;
                }
                "#}
            </style>
            <h1>{"Algo deu errado"}</h1>
            <p>{"Não foi possível carregar o conteúdo do site. Tente recarregar a página em alguns instantes."}</p>
            <code>{&props.message}</code>
            <button onclick={reload}>{"Recarregar"}</button>
        </div>
    }
}
