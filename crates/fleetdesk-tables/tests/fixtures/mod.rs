//! Common test fixtures for fleetdesk-tables tests

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use fleetdesk_tables::column::BaseColumn;
use fleetdesk_tables::{Action, CellValue, DataTable, Record};
use rstest::*;

/// A vehicle of the fleet list screen
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
	pub id: u32,
	pub plate: String,
	pub model: String,
	pub seats: u32,
	pub mileage: Option<f64>,
	pub active: bool,
	pub depot: Option<String>,
}

impl Vehicle {
	fn new(
		id: u32,
		plate: &str,
		model: &str,
		seats: u32,
		mileage: Option<f64>,
		active: bool,
		depot: Option<&str>,
	) -> Self {
		Self {
			id,
			plate: plate.to_string(),
			model: model.to_string(),
			seats,
			mileage,
			active,
			depot: depot.map(str::to_string),
		}
	}
}

impl Record for Vehicle {
	fn field(&self, key: &str) -> CellValue {
		match key {
			"id" => self.id.into(),
			"plate" => self.plate.as_str().into(),
			"model" => self.model.as_str().into(),
			"seats" => self.seats.into(),
			"mileage" => self.mileage.into(),
			"active" => self.active.into(),
			"depot" => self.depot.as_deref().into(),
			_ => CellValue::Null,
		}
	}
}

/// Fixture providing seven vehicles in insertion order
#[fixture]
pub fn vehicles() -> Vec<Vehicle> {
	vec![
		Vehicle::new(1, "GH-204-KL", "Kangoo", 2, Some(48_210.5), true, Some("Lyon")),
		Vehicle::new(2, "AB-123-CD", "Partner", 2, Some(120_400.0), true, Some("Nantes")),
		Vehicle::new(3, "ZT-889-QA", "Master", 3, None, false, None),
		Vehicle::new(4, "EF-456-GH", "Trafic", 9, Some(15_000.0), true, Some("Lyon")),
		Vehicle::new(5, "CD-777-XY", "Zoé", 5, Some(32_000.0), false, Some("Rennes")),
		Vehicle::new(6, "KL-010-MN", "Expert", 9, Some(87_000.0), true, Some("Nantes")),
		Vehicle::new(7, "MN-342-PR", "Kangoo", 2, Some(99_000.0), true, Some("Lyon")),
	]
}

/// Fixture providing the vehicle table with its columns and row actions
///
/// Actions: 0 "Edit" (always), 1 "Retire" (active vehicles only), 2 "Service"
/// (disabled when the mileage is unknown).
#[fixture]
pub fn vehicle_table() -> DataTable<Vehicle> {
	let mut table = DataTable::new();
	table.add_column(BaseColumn::field("plate", "Plate")).unwrap();
	table.add_column(BaseColumn::field("model", "Model")).unwrap();
	table
		.add_column(BaseColumn::field("seats", "Seats").searchable(false))
		.unwrap();
	table
		.add_column(BaseColumn::field("mileage", "Mileage").searchable(false))
		.unwrap();
	table
		.add_column(BaseColumn::field("depot", "Depot").sortable(false))
		.unwrap();

	table.add_action(Action::new("Edit", |_: &Vehicle, _| {}));
	table.add_action(Action::new("Retire", |_: &Vehicle, _| {}).visible_when(|v: &Vehicle| v.active));
	table.add_action(
		Action::new("Service", |_: &Vehicle, _| {}).disabled_when(|v: &Vehicle| v.mileage.is_none()),
	);
	table
}

/// Row keys of a rendered page
pub fn keys<R>(view: &fleetdesk_tables::TableView<'_, R>) -> Vec<String> {
	view.rows.iter().map(|row| row.key.clone()).collect()
}

/// A tracing layer that captures log messages to a Vec<String>
pub struct LogCapture {
	pub logs: Arc<Mutex<Vec<String>>>,
}

impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for LogCapture {
	fn on_event(&self, event: &tracing::Event<'_>, _ctx: tracing_subscriber::layer::Context<'_, S>) {
		struct MessageVisitor {
			message: String,
		}

		impl tracing::field::Visit for MessageVisitor {
			fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
				if field.name() == "message" {
					self.message = format!("{:?}", value);
				}
			}
		}

		let mut visitor = MessageVisitor {
			message: String::new(),
		};
		event.record(&mut visitor);

		let mut logs = self.logs.lock().unwrap();
		logs.push(format!("[{}] {}", event.metadata().level(), visitor.message));
	}
}
