use parking_lot::Mutex;
use std::{fmt::Debug, sync::Arc};

/// Raw contents of the POI form, as typed by the user.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PoiFormInput {
	pub name: String,
	pub poi_type: String,
	pub address: String,
	/// Free-form JSON object text.
	pub properties: String,
}

impl PoiFormInput {
	/// `None` for blank fields, the trimmed text otherwise.
	pub fn field(text: &str) -> Option<String> {
		let text = text.trim();
		if text.is_empty() { None } else { Some(text.to_string()) }
	}
}

/// Where a click on the open form landed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalClick {
	/// On the dimmed area around the form.
	Backdrop,
	Content,
}

/// The page elements the session talks to: alerts, the POI count line and the form.
pub trait PoiView: Debug + Send {
	/// Shows a blocking message.
	fn alert(&mut self, message: &str);
	/// Replaces the POI count text.
	fn set_status(&mut self, text: &str);
	fn open_form(&mut self);
	fn close_form(&mut self);
	/// Empties all form fields.
	fn reset_form(&mut self);
	fn read_form(&self) -> PoiFormInput;
}

#[derive(Debug, Default)]
struct ViewState {
	alerts: Vec<String>,
	status: Option<String>,
	form_open: bool,
	form: PoiFormInput,
}

/// A [`PoiView`] that remembers everything it is told.
///
/// Clones share their state, so one clone can be handed to the editor while
/// another fills in the form and inspects alerts.
#[derive(Clone, Debug, Default)]
pub struct RecordingView {
	state: Arc<Mutex<ViewState>>,
}

impl RecordingView {
	pub fn new() -> RecordingView {
		RecordingView::default()
	}

	pub fn alerts(&self) -> Vec<String> {
		self.state.lock().alerts.clone()
	}

	pub fn last_alert(&self) -> Option<String> {
		self.state.lock().alerts.last().cloned()
	}

	pub fn status(&self) -> Option<String> {
		self.state.lock().status.clone()
	}

	pub fn is_form_open(&self) -> bool {
		self.state.lock().form_open
	}

	pub fn fill_form(&self, input: PoiFormInput) {
		self.state.lock().form = input;
	}

	pub fn form(&self) -> PoiFormInput {
		self.state.lock().form.clone()
	}
}

impl PoiView for RecordingView {
	fn alert(&mut self, message: &str) {
		log::info!("alert: {message}");
		self.state.lock().alerts.push(message.to_string());
	}

	fn set_status(&mut self, text: &str) {
		log::debug!("status: {text}");
		self.state.lock().status = Some(text.to_string());
	}

	fn open_form(&mut self) {
		self.state.lock().form_open = true;
	}

	fn close_form(&mut self) {
		self.state.lock().form_open = false;
	}

	fn reset_form(&mut self) {
		self.state.lock().form = PoiFormInput::default();
	}

	fn read_form(&self) -> PoiFormInput {
		self.state.lock().form.clone()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("", None)]
	#[case("   ", None)]
	#[case(" Cafe ", Some("Cafe"))]
	fn blank_fields(#[case] text: &str, #[case] expected: Option<&str>) {
		assert_eq!(PoiFormInput::field(text).as_deref(), expected);
	}

	#[test]
	fn clones_share_state() {
		let observer = RecordingView::new();
		let mut view: Box<dyn PoiView> = Box::new(observer.clone());

		observer.fill_form(PoiFormInput {
			name: "Bakery".into(),
			..Default::default()
		});
		assert_eq!(view.read_form().name, "Bakery");

		view.open_form();
		view.alert("hello");
		view.set_status("Total POIs: 2");
		assert!(observer.is_form_open());
		assert_eq!(observer.alerts(), vec!["hello"]);
		assert_eq!(observer.status().as_deref(), Some("Total POIs: 2"));

		view.close_form();
		view.reset_form();
		assert!(!observer.is_form_open());
		assert_eq!(observer.form(), PoiFormInput::default());
	}
}
