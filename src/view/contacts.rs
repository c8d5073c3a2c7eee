//! Contacts table model.

// self
use crate::{
	_prelude::*,
	catalog::Contact,
	client::BlendbaseClient,
	http::GraphQlHttpClient,
	view::PageState,
};

/// Column headers in display order.
pub const CONTACT_COLUMNS: [&str; 5] = ["ID", "Company", "Name", "Email", "Phone"];

/// One table row; absent fields render as empty cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactRow {
	/// Contact ID.
	pub id: String,
	/// Company name.
	pub company: String,
	/// Full name.
	pub name: String,
	/// Email address.
	pub email: String,
	/// Phone number.
	pub phone: String,
}
impl ContactRow {
	/// Cells in [`CONTACT_COLUMNS`] order.
	pub fn cells(&self) -> [&str; 5] {
		[&self.id, &self.company, &self.name, &self.email, &self.phone].map(String::as_str)
	}
}
impl From<Contact> for ContactRow {
	fn from(contact: Contact) -> Self {
		Self {
			id: contact.id,
			company: contact.company_name.unwrap_or_default(),
			name: contact.name.unwrap_or_default(),
			email: contact.email.unwrap_or_default(),
			phone: contact.phone.unwrap_or_default(),
		}
	}
}

/// Contacts page: one row per contact in API order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactsPage {
	/// Table rows.
	pub rows: Vec<ContactRow>,
}
impl ContactsPage {
	/// Builds the page from an already-fetched contact list.
	pub fn new(contacts: Vec<Contact>) -> Self {
		Self { rows: contacts.into_iter().map(ContactRow::from).collect() }
	}

	/// Fetches contacts through `client`.
	pub async fn load<C>(client: &BlendbaseClient<C>) -> PageState<Self>
	where
		C: ?Sized + GraphQlHttpClient,
	{
		PageState::from_result(client.list_contacts().await.map(Self::new))
	}
}
