//! Toast notification state.
//!
//! A small Leptos-context service: handlers push toasts, the
//! [`ToastContainer`](crate::components::toast::ToastContainer) renders and
//! dismisses them. Every error path in the search flow ends here as a short
//! title plus description.

use leptos::prelude::*;

/// Visual flavor of a toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
	/// Green accent, confirmations.
	Success,
	/// Red accent, failures.
	Error,
	/// Neutral accent, informational messages.
	Info,
}

/// One on-screen notification.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
	/// Unique, monotonically assigned id used for dismissal.
	pub id: u64,
	/// Visual flavor.
	pub kind: ToastKind,
	/// Short heading.
	pub title: String,
	/// One-line body text.
	pub message: String,
}

/// Notification list shared through context.
#[derive(Clone, Copy)]
pub struct Notifications {
	toasts: RwSignal<Vec<Toast>>,
	next_id: RwSignal<u64>,
}

impl Notifications {
	/// Create an empty notification list.
	pub fn new() -> Self {
		Self {
			toasts: RwSignal::new(Vec::new()),
			next_id: RwSignal::new(0),
		}
	}

	/// Signal holding the currently visible toasts.
	pub fn toasts(&self) -> RwSignal<Vec<Toast>> {
		self.toasts
	}

	/// Push a toast and return its id.
	pub fn push(&self, kind: ToastKind, title: &str, message: &str) -> u64 {
		let id = self.next_id.get_untracked();
		self.next_id.set(id + 1);
		self.toasts.update(|list| {
			list.push(Toast {
				id,
				kind,
				title: title.to_string(),
				message: message.to_string(),
			});
		});
		id
	}

	/// Push a success toast.
	pub fn success(&self, title: &str, message: &str) -> u64 {
		self.push(ToastKind::Success, title, message)
	}

	/// Push an error toast.
	pub fn error(&self, title: &str, message: &str) -> u64 {
		self.push(ToastKind::Error, title, message)
	}

	/// Push an informational toast.
	pub fn info(&self, title: &str, message: &str) -> u64 {
		self.push(ToastKind::Info, title, message)
	}

	/// Remove the toast with the given id, if still present.
	pub fn dismiss(&self, id: u64) {
		self.toasts.update(|list| {
			if let Some(pos) = list.iter().position(|t| t.id == id) {
				list.remove(pos);
			}
		});
	}
}

impl Default for Notifications {
	fn default() -> Self {
		Self::new()
	}
}

/// Install a fresh notification list into context. Call once, at the app
/// root.
pub fn provide_notifications() {
	provide_context(Notifications::new());
}

/// Fetch the notification list from context.
pub fn use_notifications() -> Notifications {
	expect_context::<Notifications>()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn push_assigns_increasing_ids() {
		let n = Notifications::new();
		let a = n.error("Error", "Please enter a search query");
		let b = n.info("Node selected", "cats");
		assert!(b > a);
		assert_eq!(n.toasts().get_untracked().len(), 2);
	}

	#[test]
	fn dismiss_removes_only_the_target() {
		let n = Notifications::new();
		let a = n.success("Success", "Search results updated");
		let b = n.error("Error", "Failed to perform search");

		n.dismiss(a);
		let left = n.toasts().get_untracked();
		assert_eq!(left.len(), 1);
		assert_eq!(left[0].id, b);
		assert_eq!(left[0].kind, ToastKind::Error);

		// Dismissing an unknown id is a no-op.
		n.dismiss(999);
		assert_eq!(n.toasts().get_untracked().len(), 1);
	}
}
