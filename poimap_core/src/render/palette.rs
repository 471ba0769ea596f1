/// Fill colors handed out to polygons, in order.
pub const POLYGON_PALETTE: [&str; 10] = [
	"#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f", "#bcbd22", "#17becf",
];

/// Cycles through [`POLYGON_PALETTE`].
///
/// The i-th color handed out since the last [`reset`](ColorCycle::reset) is
/// `POLYGON_PALETTE[i % 10]`, so the same render order always yields the same
/// colors. The cycle knows nothing about feature identity.
#[derive(Clone, Debug, Default)]
pub struct ColorCycle {
	cursor: usize,
}

impl ColorCycle {
	pub fn new() -> ColorCycle {
		ColorCycle { cursor: 0 }
	}

	pub fn next_color(&mut self) -> &'static str {
		let color = POLYGON_PALETTE[self.cursor % POLYGON_PALETTE.len()];
		self.cursor = (self.cursor + 1) % POLYGON_PALETTE.len();
		color
	}

	pub fn reset(&mut self) {
		self.cursor = 0;
	}
}
