use dioxus::prelude::*;

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        main {
            h1 { "Hello from Dioxus" }
            Counter {}
            Echo {}
        }
    }
}

#[component]
fn Counter() -> Element {
    let mut count = use_signal(|| 0);

    rsx! {
        section {
            h2 { "Counter" }
            p { "Count: {count}" }
            button { onclick: move |_| count -= 1, "-1" }
            button { onclick: move |_| count.set(0), "Reset" }
            button { onclick: move |_| count += 1, "+1" }
        }
    }
}

#[component]
fn Echo() -> Element {
    let mut text = use_signal(String::new);

    rsx! {
        section {
            h2 { "Echo" }
            input {
                r#type: "text",
                placeholder: "Type something",
                value: "{text}",
                oninput: move |event| text.set(event.value()),
            }
            p { "You typed: {text}" }
        }
    }
}
