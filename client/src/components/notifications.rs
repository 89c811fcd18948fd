// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::registration::submission::Notifier;
use gloo_timers::future::TimeoutFuture;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;
use sycamore::futures::spawn_local;
use sycamore::prelude::*;
use web_sys::Event as WebEvent;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Notification {
	id: u64,
	message: String,
}

impl Notification {
	pub fn message(&self) -> &str {
		&self.message
	}
}

/// Page-wide list of transient notifications. Cheap to clone; all clones share the same list.
#[derive(Clone)]
pub struct Notifications {
	entries: RcSignal<Vec<Notification>>,
	next_id: Rc<Cell<u64>>,
	lifetime: Duration,
}

impl Notifications {
	pub fn new(lifetime: Duration) -> Self {
		Self {
			entries: create_rc_signal(Vec::new()),
			next_id: Rc::new(Cell::new(0)),
			lifetime,
		}
	}

	pub fn entries(&self) -> RcSignal<Vec<Notification>> {
		self.entries.clone()
	}

	/// Adds a notification and returns its ID
	pub fn push(&self, message: &str) -> u64 {
		let id = self.next_id.get();
		self.next_id.set(id + 1);
		self.entries.modify().push(Notification {
			id,
			message: String::from(message),
		});
		id
	}

	/// Removes a notification. Removing one that's already gone does nothing.
	pub fn dismiss(&self, id: u64) {
		let index = self.entries.get().iter().position(|notification| notification.id == id);
		if let Some(index) = index {
			self.entries.modify().remove(index);
		}
	}
}

impl Notifier for Notifications {
	fn notify_error(&self, message: &str) {
		let id = self.push(message);
		let notifications = self.clone();
		let lifetime = u32::try_from(self.lifetime.as_millis()).unwrap_or(u32::MAX);
		spawn_local(async move {
			TimeoutFuture::new(lifetime).await;
			notifications.dismiss(id);
		});
	}
}

#[component]
pub fn NotificationList<G: Html>(ctx: Scope<'_>) -> View<G> {
	let notifications: &Notifications = use_context(ctx);
	let entries = create_memo(ctx, || (*notifications.entries.get()).clone());

	view! {
		ctx,
		ul(id="page_notifications") {
			Indexed(
				iterable=entries,
				view=move |ctx, notification| {
					let id = notification.id;
					let message = String::from(notification.message());
					let dismiss_handler = move |_event: WebEvent| notifications.dismiss(id);
					view! {
						ctx,
						li(class="page_notification page_notification_error", role="alert") {
							span(class="page_notification_text") { (message.clone()) }
							span(class="page_notification_dismiss") {
								a(class="click", on:click=dismiss_handler) { "[X]" }
							}
						}
					}
				}
			)
		}
	}
}
