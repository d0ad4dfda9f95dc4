//! Contacts Section Component
//!
//! Contact details and a message form. The form does not send anything.

use leptos::prelude::*;

use crate::components::Icon;
use crate::context::use_shop_context;

#[component]
fn MessageForm() -> impl IntoView {
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        log::debug!("[CONTACTS] Message form submitted, nothing to send");
    };

    view! {
        <div class="card contact-card">
            <h3 class="card-title">"Написать нам"</h3>
            <form class="message-form" on:submit=on_submit>
                <label class="field">
                    <span class="field-label">"Имя"</span>
                    <input type="text" class="text-input" placeholder="Ваше имя" />
                </label>
                <label class="field">
                    <span class="field-label">"Email"</span>
                    <input type="email" class="text-input" placeholder="your@email.com" />
                </label>
                <label class="field">
                    <span class="field-label">"Сообщение"</span>
                    <textarea class="text-input message-input" placeholder="Ваше сообщение"></textarea>
                </label>
                <button type="submit" class="btn btn-gradient btn-block">"Отправить"</button>
            </form>
        </div>
    }
}

#[component]
pub fn ContactsSection() -> impl IntoView {
    let contacts = use_shop_context().shop().contacts;

    view! {
        <section class="container page-section">
            <h2 class="page-title gradient-text">"Контакты"</h2>
            <div class="contacts-grid">
                <div class="card contact-card">
                    <h3 class="card-title">"Свяжитесь с нами"</h3>
                    <div class="contact-list">
                        {contacts.into_iter().map(|entry| {
                            view! {
                                <div class="contact-row">
                                    <Icon name=entry.icon size=24 class="text-primary" />
                                    <div>
                                        <p class="contact-label">{entry.label}</p>
                                        <p class="muted">{entry.value}</p>
                                    </div>
                                </div>
                            }
                        }).collect_view()}
                    </div>
                </div>
                <MessageForm />
            </div>
        </section>
    }
}
