// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::registration::validation::FieldError;
use sycamore::prelude::*;

#[derive(Prop)]
pub struct FormFieldProps<'a> {
	id: &'static str,
	label: &'static str,
	input_type: &'static str,
	value: &'a Signal<String>,
	error: &'a ReadSignal<Option<FieldError>>,
}

/// Labeled input with its validation message underneath
#[component]
pub fn FormField<'a, G: Html>(ctx: Scope<'a>, props: FormFieldProps<'a>) -> View<G> {
	let error = props.error;
	let input_class = create_memo(ctx, move || {
		if error.get().is_some() {
			"input input_with_error"
		} else {
			"input"
		}
	});

	view! {
		ctx,
		div(class="form_field") {
			label(class="label", for=props.id) { (props.label) }
			input(id=props.id, type=props.input_type, class=*input_class.get(), bind:value=props.value)
			(
				if let Some(error) = *error.get() {
					view! {
						ctx,
						div(class="input_error") { (error.to_string()) }
					}
				} else {
					view! { ctx, }
				}
			)
		}
	}
}
