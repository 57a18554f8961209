use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use transportadora::Gateway;
use transportadora::login::LoginScreen;

use crate::components::button::Button;
use crate::components::input::Input;
use crate::components::toast::use_notification_toast;
use crate::{Route, Session};

/// Time the success toast stays up before leaving the page.
const REDIRECT_DELAY_MS: u32 = 1000;

#[component]
pub fn Login() -> Element {
    let gateway = use_context::<Gateway>();
    let mut session = use_context::<Session>();
    let mut screen = use_signal(LoginScreen::new);
    let nav = navigator();

    let state = screen.read();
    let email = state.credentials.email.clone();
    let password = state.credentials.password.clone();
    let email_error = state.error_for("email").map(str::to_string);
    let password_error = state.error_for("password").map(str::to_string);
    let submitting = state.submitting;
    let notification = state.notification().cloned();
    drop(state);

    use_notification_toast(notification, move |_| screen.write().dismiss_notification());

    rsx! {
        div { id: "login",
            div { class: "login-card",
                h1 { "Transportadora" }
                p { class: "login-subtitle", "Acesse o painel administrativo" }

                form {
                    class: "login-form",
                    onsubmit: move |e: FormEvent| e.prevent_default(),
                    Input {
                        id: "email",
                        label: "E-mail",
                        value: email,
                        input_type: "email",
                        placeholder: "seu@email.com",
                        required: true,
                        error: email_error,
                        oninput: move |e: FormEvent| screen.write().set_email(e.value()),
                    }
                    Input {
                        id: "password",
                        label: "Senha",
                        value: password,
                        input_type: "password",
                        placeholder: "Digite sua senha",
                        required: true,
                        error: password_error,
                        oninput: move |e: FormEvent| screen.write().set_password(e.value()),
                    }

                    div { align_content: "center",
                        Button {
                            button_type: "submit",
                            disabled: submitting,
                            onclick: move |_| {
                                let Some(request) = screen.write().begin_submit() else {
                                    return;
                                };
                                let auth = gateway.auth.clone();
                                spawn(async move {
                                    let result = auth.login(&request).await;
                                    if let Ok(response) = &result {
                                        session.set(Some(response.clone()));
                                    }
                                    let next = screen.write().finish_submit(result);
                                    if let Some(page) = next {
                                        TimeoutFuture::new(REDIRECT_DELAY_MS).await;
                                        nav.push(Route::from(page));
                                    }
                                });
                            },
                            if submitting { "Entrando..." } else { "Entrar" }
                        }
                    }
                }
            }
        }
    }
}
