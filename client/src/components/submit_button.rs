// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use sycamore::prelude::*;

#[derive(Prop)]
pub struct SubmitButtonProps<'a> {
	label: &'static str,
	submitting: &'a ReadSignal<bool>,
}

/// Form submit button that is disabled and shows a spinner while a submission is out
#[component]
pub fn SubmitButton<'a, G: Html>(ctx: Scope<'a>, props: SubmitButtonProps<'a>) -> View<G> {
	let submitting = props.submitting;

	view! {
		ctx,
		button(type="submit", class="button button_primary", disabled=*submitting.get()) {
			(if *submitting.get() {
				view! { ctx, span(class="loading_spinner") {} }
			} else {
				view! { ctx, }
			})
			(props.label)
		}
	}
}
