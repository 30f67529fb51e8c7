//! Toast rendering for the notification service.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::notify::{Toast, ToastKind, use_notifications};

/// How long a toast stays up before auto-dismissing.
const TOAST_DURATION_MS: u32 = 4_000;

/// Fixed-position stack of active toasts. Place once, near the app root.
#[component]
pub fn ToastContainer() -> impl IntoView {
	let notifications = use_notifications();

	view! {
		<div class="toast-container">
			<For
				each=move || notifications.toasts().get()
				key=|toast| toast.id
				children=move |toast| {
					view! { <ToastView toast=toast /> }
				}
			/>
		</div>
	}
}

#[component]
fn ToastView(toast: Toast) -> impl IntoView {
	let notifications = use_notifications();
	let id = toast.id;

	Timeout::new(TOAST_DURATION_MS, move || {
		notifications.dismiss(id);
	})
	.forget();

	let kind_class = match toast.kind {
		ToastKind::Success => "toast toast-success",
		ToastKind::Error => "toast toast-error",
		ToastKind::Info => "toast toast-info",
	};

	view! {
		<div class=kind_class role="alert">
			<div class="toast-body">
				<div class="toast-title">{toast.title}</div>
				<div class="toast-message">{toast.message}</div>
			</div>
			<button
				class="toast-close"
				aria-label="Close"
				on:click=move |_| notifications.dismiss(id)
			>
				"×"
			</button>
		</div>
	}
}
