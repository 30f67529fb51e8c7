//! Query input: a controlled text field plus submit button.

use leptos::prelude::*;
use web_sys::SubmitEvent;

/// Trim a raw query, rejecting empty and whitespace-only input.
pub fn normalize_query(raw: &str) -> Option<String> {
	let trimmed = raw.trim();
	(!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Controlled search form.
///
/// The submit button is disabled while a search is in flight; that is the
/// only re-entrancy guard in the app. Validation and dispatch belong to the
/// `on_submit` handler, this component only owns the text state.
#[component]
pub fn SearchBar(
	/// Current query text, owned by the caller.
	query: RwSignal<String>,
	#[prop(into)] is_loading: Signal<bool>,
	#[prop(into)] on_submit: Callback<()>,
) -> impl IntoView {
	let submit = move |ev: SubmitEvent| {
		ev.prevent_default();
		on_submit.run(());
	};

	view! {
		<form class="search-bar" on:submit=submit>
			<input
				type="text"
				class="search-input"
				placeholder="Enter your search query..."
				prop:value=move || query.get()
				on:input=move |ev| query.set(event_target_value(&ev))
			/>
			<button type="submit" class="search-button" disabled=move || is_loading.get()>
				{move || if is_loading.get() { "Searching..." } else { "Search" }}
			</button>
		</form>
	}
}
