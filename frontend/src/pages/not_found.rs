use yew::prelude::*;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <style>
                {r#"
                    .not-found {
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        gap: 1rem;
                        text-align: center;
                    }
                    .not-found h1 {
                        font-size: 3rem;
                        font-weight: 700;
                    }
                    .not-found a {
                        color: #111;
                        text-decoration: underline;
                    }
                "#}
            </style>
            <h1>{ "404" }</h1>
            <p>{ "This page doesn't exist." }</p>
            <a href="/">{ "Back to home" }</a>
        </div>
    }
}
