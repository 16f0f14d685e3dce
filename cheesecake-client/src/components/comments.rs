use cheesecake::comments::{MAX_DESCRIPTION_WORDS, word_count};
use cheesecake::{Comment, NewComment};
use dioxus::prelude::*;

use crate::api::ApiClient;
use crate::browser;
use crate::hooks::use_notifications;

const RATINGS: [u8; 5] = [5, 4, 3, 2, 1];

fn stars(rating: Option<u8>) -> String {
    let filled = rating.unwrap_or(0).min(5) as usize;
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

#[component]
pub fn CommentsSection() -> Element {
    let mut comments = use_signal(Vec::<Comment>::new);
    let mut loading = use_signal(|| true);

    use_effect(move || {
        spawn(async move {
            match ApiClient::new().get_comments().await {
                Ok(list) => comments.set(list),
                Err(e) => {
                    dioxus_logger::tracing::warn!("Could not load comments: {}", browser::describe(&e));
                }
            }
            loading.set(false);
        });
    });

    rsx! {
        section { id: "reviews", class: "py-12 bg-white/60",
            div { class: "container mx-auto px-4 grid grid-cols-1 lg:grid-cols-2 gap-10",
                div {
                    h2 { class: "text-3xl font-bold mb-6", "What our guests say" }
                    if loading() {
                        p { class: "text-gray-500", "Loading reviews..." }
                    } else if comments.read().is_empty() {
                        p { class: "text-gray-500", "Be the first to leave a review." }
                    } else {
                        div { class: "space-y-4",
                            for comment in comments.read().iter().cloned() {
                                CommentCard { key: "{comment.id}", comment }
                            }
                        }
                    }
                }
                CommentForm { on_posted: move |comment| comments.write().insert(0, comment) }
            }
        }
    }
}

#[component]
fn CommentCard(comment: Comment) -> Element {
    let date = comment.created_at.format("%B %-d, %Y").to_string();
    let rating = stars(comment.rating);

    rsx! {
        div { class: "p-5 rounded-xl bg-amber-50 border border-amber-200",
            div { class: "flex justify-between items-center mb-2",
                span { class: "font-semibold", "{comment.client_name}" }
                span { class: "text-amber-500", "{rating}" }
            }
            p { class: "text-gray-700 mb-2", "{comment.description}" }
            span { class: "text-xs text-gray-400", "{date}" }
        }
    }
}

#[component]
fn CommentForm(on_posted: EventHandler<Comment>) -> Element {
    let mut name = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut rating = use_signal(|| 5u8);
    let mut submitting = use_signal(|| false);
    let notif = use_notifications();

    let words = word_count(&description.read());
    let over_limit = words > MAX_DESCRIPTION_WORDS;

    let handle_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        if submitting() {
            return;
        }

        let input = NewComment {
            client_name: name(),
            description: description(),
            rating: Some(rating()),
            ..NewComment::default()
        };

        // Rejected input stays in the form so the visitor can fix it
        if let Err(e) = input.clone().validated() {
            let mut notif = notif;
            notif.error(e.to_string());
            return;
        }

        submitting.set(true);
        let mut notif = notif;
        spawn(async move {
            match ApiClient::new().submit_comment(input).await {
                Ok(comment) => {
                    on_posted.call(comment);
                    name.set(String::new());
                    description.set(String::new());
                    rating.set(5);
                    notif.success("Thank you for your review!");
                }
                Err(e) => notif.error(browser::describe(&e)),
            }
            submitting.set(false);
        });
    };

    rsx! {
        form { class: "p-6 rounded-2xl bg-white shadow-lg border border-amber-100",
            onsubmit: handle_submit,
            h3 { class: "text-xl font-bold mb-4", "Leave a review" }
            div { class: "mb-4",
                label { class: "block font-medium mb-2", "Name" }
                input {
                    class: "w-full p-3 border border-gray-300 rounded-lg",
                    placeholder: "Anonymous",
                    value: name(),
                    oninput: move |evt| name.set(evt.value()),
                }
            }
            div { class: "mb-4",
                label { class: "block font-medium mb-2", "Rating" }
                select {
                    class: "w-full p-3 border border-gray-300 rounded-lg",
                    value: rating().to_string(),
                    onchange: move |evt| {
                        if let Ok(value) = evt.value().parse() {
                            rating.set(value);
                        }
                    },
                    for value in RATINGS {
                        option { value: value.to_string(), {stars(Some(value))} }
                    }
                }
            }
            div { class: "mb-4",
                label { class: "block font-medium mb-2", "Your experience" }
                textarea {
                    class: if over_limit { "w-full p-3 border-2 border-red-500 rounded-lg" } else { "w-full p-3 border border-gray-300 rounded-lg" },
                    rows: "4",
                    value: description(),
                    oninput: move |evt| description.set(evt.value()),
                }
                p { class: if over_limit { "text-sm text-red-500 mt-1" } else { "text-sm text-gray-400 mt-1" },
                    "{words}/{MAX_DESCRIPTION_WORDS} words"
                }
            }
            button {
                r#type: "submit",
                class: "w-full px-5 py-3 rounded-lg bg-emerald-500 hover:bg-emerald-600 text-white font-semibold disabled:opacity-50",
                disabled: submitting() || over_limit,
                if submitting() { "Sending..." } else { "Submit review" }
            }
        }
    }
}
