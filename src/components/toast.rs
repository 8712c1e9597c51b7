//! 全局提示条

use crate::store::{MessageKind, use_messages};
use leptos::prelude::*;

#[component]
pub fn MessageToast() -> impl IntoView {
    let messages = use_messages();
    let current = messages.current();

    move || {
        current.get().map(|msg| {
            let class = match msg.kind {
                MessageKind::Info => "alert alert-info shadow-lg",
                MessageKind::Success => "alert alert-success shadow-lg",
                MessageKind::Warn => "alert alert-warning shadow-lg",
                MessageKind::Error => "alert alert-error shadow-lg",
            };
            view! {
                <div class="toast toast-top toast-center z-50">
                    <div class=class on:click=move |_| messages.dismiss()>
                        <span>{msg.text}</span>
                    </div>
                </div>
            }
        })
    }
}
