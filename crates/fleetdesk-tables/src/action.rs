//! Row actions and their per-record visibility

use std::fmt;
use std::sync::Arc;

type Predicate<R> = Arc<dyn Fn(&R) -> bool + Send + Sync>;
type Handler<R> = Arc<dyn Fn(&R, usize) + Send + Sync>;

/// A boolean that is either fixed or computed from the record
pub enum Flag<R> {
	/// Same answer for every record
	Static(bool),
	/// Answer computed per record
	Predicate(Predicate<R>),
}

impl<R> Flag<R> {
	/// Builds a per-record flag
	pub fn predicate<F>(f: F) -> Self
	where
		F: Fn(&R) -> bool + Send + Sync + 'static,
	{
		Self::Predicate(Arc::new(f))
	}

	/// Evaluates the flag for one record
	///
	/// Predicates are called every time; records may change between calls.
	pub fn resolve(&self, record: &R) -> bool {
		match self {
			Self::Static(value) => *value,
			Self::Predicate(f) => f(record),
		}
	}
}

impl<R> Clone for Flag<R> {
	fn clone(&self) -> Self {
		match self {
			Self::Static(value) => Self::Static(*value),
			Self::Predicate(f) => Self::Predicate(Arc::clone(f)),
		}
	}
}

impl<R> fmt::Debug for Flag<R> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Static(value) => f.debug_tuple("Static").field(value).finish(),
			Self::Predicate(_) => f.debug_tuple("Predicate").finish_non_exhaustive(),
		}
	}
}

impl<R> From<bool> for Flag<R> {
	fn from(value: bool) -> Self {
		Self::Static(value)
	}
}

/// An action offered on every row, such as "Edit" or "Deactivate"
///
/// # Example
///
/// ```rust
/// use fleetdesk_tables::{Action, CellValue, Record};
/// use serde_json::Value;
///
/// let deactivate = Action::new("Désactiver", |client: &Value, _index| {
///     println!("deactivating {}", client.field("id"));
/// })
/// .visible_when(|client: &Value| client.field("status") != CellValue::from("Inactif"));
/// ```
pub struct Action<R> {
	label: String,
	handler: Handler<R>,
	visible: Flag<R>,
	disabled: Flag<R>,
}

impl<R> Action<R> {
	/// Creates an action that is visible and enabled for every record
	pub fn new<F>(label: impl Into<String>, handler: F) -> Self
	where
		F: Fn(&R, usize) + Send + Sync + 'static,
	{
		Self {
			label: label.into(),
			handler: Arc::new(handler),
			visible: Flag::Static(true),
			disabled: Flag::Static(false),
		}
	}

	/// Sets the visibility flag
	pub fn visible(mut self, visible: impl Into<Flag<R>>) -> Self {
		self.visible = visible.into();
		self
	}

	/// Shows the action only for records matching `f`
	pub fn visible_when<F>(self, f: F) -> Self
	where
		F: Fn(&R) -> bool + Send + Sync + 'static,
	{
		self.visible(Flag::predicate(f))
	}

	/// Sets the disabled flag
	pub fn disabled(mut self, disabled: impl Into<Flag<R>>) -> Self {
		self.disabled = disabled.into();
		self
	}

	/// Disables the action for records matching `f`
	pub fn disabled_when<F>(self, f: F) -> Self
	where
		F: Fn(&R) -> bool + Send + Sync + 'static,
	{
		self.disabled(Flag::predicate(f))
	}

	/// Returns the label shown to the user
	pub fn label(&self) -> &str {
		&self.label
	}

	/// Resolves visibility and disabled state for one record
	pub fn resolve(&self, record: &R) -> ResolvedAction {
		resolve(self, record)
	}

	/// Calls the handler unconditionally
	pub(crate) fn invoke(&self, record: &R, index: usize) {
		(self.handler)(record, index)
	}
}

impl<R> Clone for Action<R> {
	fn clone(&self) -> Self {
		Self {
			label: self.label.clone(),
			handler: Arc::clone(&self.handler),
			visible: self.visible.clone(),
			disabled: self.disabled.clone(),
		}
	}
}

impl<R> fmt::Debug for Action<R> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Action")
			.field("label", &self.label)
			.field("visible", &self.visible)
			.field("disabled", &self.disabled)
			.finish_non_exhaustive()
	}
}

/// Visibility of one action for one record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAction {
	/// Position of the action in the table's action list
	pub index: usize,
	/// Label of the action
	pub label: String,
	/// Whether the action is shown
	pub visible: bool,
	/// Whether the action is shown greyed out
	pub disabled: bool,
}

impl ResolvedAction {
	/// Returns true when the action can be triggered
	pub fn is_available(&self) -> bool {
		self.visible && !self.disabled
	}
}

/// Resolves an action against a record
///
/// Unset flags default to visible and enabled.
pub fn resolve<R>(action: &Action<R>, record: &R) -> ResolvedAction {
	ResolvedAction {
		index: 0,
		label: action.label.clone(),
		visible: action.visible.resolve(record),
		disabled: action.disabled.resolve(record),
	}
}

/// Resolves every action for one record, keeping their positions
pub fn resolve_all<R>(actions: &[Action<R>], record: &R) -> Vec<ResolvedAction> {
	actions
		.iter()
		.enumerate()
		.map(|(index, action)| ResolvedAction {
			index,
			..resolve(action, record)
		})
		.collect()
}
