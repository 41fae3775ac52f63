//! Ownership of live chart instances.
//!
//! Every chart holds a rendering context in the browser, so an instance must
//! be destroyed before its canvas is replaced. [`ChartRegistry`] keys live
//! handles by [`ChartSlot`] and disposes the previous occupant before mounting
//! a new one. The registry is owned by the dashboard controller and dropped
//! with it.

use std::collections::BTreeMap;

use log::debug;
use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlCanvasElement};

use super::charts::ChartSlot;
use crate::error::DashboardError;

/// Something that can draw a chart configuration into a canvas.
pub trait ChartBackend {
	/// Live chart instance.
	type Handle;

	/// Creates a chart in the canvas that belongs to `slot`.
	fn mount(&self, slot: ChartSlot, config: &Value) -> Result<Self::Handle, DashboardError>;

	/// Releases the instance and its rendering context.
	fn dispose(&self, handle: Self::Handle);
}

/// Chart instances keyed by slot.
pub struct ChartRegistry<B: ChartBackend> {
	backend: B,
	live: BTreeMap<ChartSlot, B::Handle>,
}

impl<B: ChartBackend> ChartRegistry<B> {
	/// Empty registry drawing through `backend`.
	pub fn new(backend: B) -> Self {
		Self {
			backend,
			live: BTreeMap::new(),
		}
	}

	/// Mounts a chart, disposing whatever occupied `slot` first.
	pub fn mount(&mut self, slot: ChartSlot, config: &Value) -> Result<(), DashboardError> {
		if let Some(previous) = self.live.remove(&slot) {
			self.backend.dispose(previous);
		}
		let handle = self.backend.mount(slot, config)?;
		self.live.insert(slot, handle);
		Ok(())
	}

	/// Disposes every live chart and empties the registry.
	pub fn dispose_all(&mut self) {
		let count = self.live.len();
		for (_, handle) in std::mem::take(&mut self.live) {
			self.backend.dispose(handle);
		}
		if count > 0 {
			debug!("chart registry: disposed {} charts", count);
		}
	}

	/// Number of live charts.
	pub fn len(&self) -> usize {
		self.live.len()
	}

	/// Whether no chart is live.
	pub fn is_empty(&self) -> bool {
		self.live.is_empty()
	}

	/// Whether `slot` holds a live chart.
	pub fn contains(&self, slot: ChartSlot) -> bool {
		self.live.contains_key(&slot)
	}

	/// The backend charts are drawn with.
	pub fn backend(&self) -> &B {
		&self.backend
	}
}

impl<B: ChartBackend> Drop for ChartRegistry<B> {
	fn drop(&mut self) {
		self.dispose_all();
	}
}

#[wasm_bindgen]
extern "C" {
	/// Chart.js, loaded globally by the host page.
	pub type Chart;

	#[wasm_bindgen(constructor, catch)]
	fn new(canvas: &HtmlCanvasElement, config: &JsValue) -> Result<Chart, JsValue>;

	#[wasm_bindgen(method)]
	fn destroy(this: &Chart);
}

/// [`ChartBackend`] drawing with the page's global Chart.js.
pub struct ChartJsBackend {
	document: Document,
}

impl ChartJsBackend {
	/// Backend resolving canvases in `document`.
	pub fn new(document: Document) -> Self {
		Self { document }
	}
}

impl ChartBackend for ChartJsBackend {
	type Handle = Chart;

	fn mount(&self, slot: ChartSlot, config: &Value) -> Result<Chart, DashboardError> {
		let canvas: HtmlCanvasElement = self
			.document
			.get_element_by_id(slot.canvas_id())
			.ok_or(DashboardError::MissingElement(slot.canvas_id()))?
			.dyn_into()
			.map_err(|_| DashboardError::WrongElementType {
				id: slot.canvas_id(),
				expected: "canvas",
			})?;

		// Plain objects, not Maps: Chart.js reads options by property access.
		let config = config
			.serialize(&serde_wasm_bindgen::Serializer::json_compatible())
			.map_err(|e| DashboardError::Chart {
				slot: slot.name(),
				message: e.to_string(),
			})?;

		Chart::new(&canvas, &config).map_err(|e| DashboardError::Chart {
			slot: slot.name(),
			message: DashboardError::from_js(e).to_string(),
		})
	}

	fn dispose(&self, handle: Chart) {
		handle.destroy();
	}
}
