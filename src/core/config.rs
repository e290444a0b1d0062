use serde::{Deserialize, Serialize};

use crate::error::{DrawerError, DrawerResult};

pub const DEFAULT_PLOT_HEIGHT_PX: i32 = 300;
pub const DEFAULT_PLOT_WIDTH_PX: i32 = 2000;
pub const DEFAULT_LABEL_SPACE_PX: i32 = 80;

/// Number of tick units that fit into one label margin.
pub const TICK_UNITS_PER_LABEL_SPACE: i32 = 8;

/// Largest widget extent (plot plus both margins) accepted in either
/// direction. Keeps stacked offsets far from `i32` overflow.
pub const MAX_WIDGET_EXTENT_PX: i32 = 1 << 20;

/// Frozen layout parameters shared by every widget of a stack.
///
/// The plot area sits inside a label margin on all four sides, so a widget
/// measures `plot + 2 * label_space` in both directions. `tick_unit` is the
/// spacing step used by axis ticks and text rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PlotConfigBuilder", into = "PlotConfigBuilder")]
pub struct PlotConfig {
    plot_height: i32,
    plot_width: i32,
    label_space: i32,
    tick_unit: i32,
}

impl PlotConfig {
    #[must_use]
    pub fn builder() -> PlotConfigBuilder {
        PlotConfigBuilder::new()
    }

    #[must_use]
    pub fn plot_height(&self) -> i32 {
        self.plot_height
    }

    #[must_use]
    pub fn plot_width(&self) -> i32 {
        self.plot_width
    }

    #[must_use]
    pub fn label_space(&self) -> i32 {
        self.label_space
    }

    #[must_use]
    pub fn tick_unit(&self) -> i32 {
        self.tick_unit
    }

    /// Widget height in canvas pixels: plot height plus top and bottom margin.
    ///
    /// `build` caps both extents at [`MAX_WIDGET_EXTENT_PX`], so this cannot
    /// overflow.
    #[must_use]
    pub fn widget_height(&self) -> i32 {
        self.plot_height + 2 * self.label_space
    }

    /// Widget width in canvas pixels for linear horizontal axes.
    #[must_use]
    pub fn widget_width(&self) -> i32 {
        self.plot_width + 2 * self.label_space
    }

    /// First canvas row of the plot area for a widget drawn at `top`.
    #[must_use]
    pub fn plot_top(&self, top: i32) -> i32 {
        top.saturating_add(self.label_space)
    }

    /// Last canvas row of the plot area (the horizontal axis row).
    #[must_use]
    pub fn plot_bottom(&self, top: i32) -> i32 {
        self.plot_top(top).saturating_add(self.plot_height)
    }
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            plot_height: DEFAULT_PLOT_HEIGHT_PX,
            plot_width: DEFAULT_PLOT_WIDTH_PX,
            label_space: DEFAULT_LABEL_SPACE_PX,
            tick_unit: DEFAULT_LABEL_SPACE_PX / TICK_UNITS_PER_LABEL_SPACE,
        }
    }
}

/// Mutable staging area for [`PlotConfig`].
///
/// Setting the label space re-derives the tick unit; an explicit
/// `with_tick_unit` afterwards overrides the derived value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfigBuilder {
    pub plot_height: i32,
    pub plot_width: i32,
    pub label_space: i32,
    pub tick_unit: Option<i32>,
}

impl Default for PlotConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PlotConfigBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            plot_height: DEFAULT_PLOT_HEIGHT_PX,
            plot_width: DEFAULT_PLOT_WIDTH_PX,
            label_space: DEFAULT_LABEL_SPACE_PX,
            tick_unit: None,
        }
    }

    #[must_use]
    pub fn with_plot_height(mut self, plot_height: i32) -> Self {
        self.plot_height = plot_height;
        self
    }

    #[must_use]
    pub fn with_plot_width(mut self, plot_width: i32) -> Self {
        self.plot_width = plot_width;
        self
    }

    #[must_use]
    pub fn with_label_space(mut self, label_space: i32) -> Self {
        self.label_space = label_space;
        self.tick_unit = None;
        self
    }

    #[must_use]
    pub fn with_tick_unit(mut self, tick_unit: i32) -> Self {
        self.tick_unit = Some(tick_unit);
        self
    }

    /// Validates and freezes the layout.
    pub fn build(self) -> DrawerResult<PlotConfig> {
        if self.plot_height <= 0 {
            return Err(DrawerError::InvalidConfig(format!(
                "plot height must be > 0, got {}",
                self.plot_height
            )));
        }
        if self.plot_width <= 0 {
            return Err(DrawerError::InvalidConfig(format!(
                "plot width must be > 0, got {}",
                self.plot_width
            )));
        }
        if self.label_space <= 0 {
            return Err(DrawerError::InvalidConfig(format!(
                "label space must be > 0, got {}",
                self.label_space
            )));
        }
        check_extent("height", self.plot_height, self.label_space)?;
        check_extent("width", self.plot_width, self.label_space)?;

        let tick_unit = self
            .tick_unit
            .unwrap_or(self.label_space / TICK_UNITS_PER_LABEL_SPACE);
        if tick_unit <= 0 {
            return Err(DrawerError::InvalidConfig(format!(
                "tick unit must be > 0, got {tick_unit}; label space below \
                 {TICK_UNITS_PER_LABEL_SPACE} needs an explicit tick unit"
            )));
        }

        Ok(PlotConfig {
            plot_height: self.plot_height,
            plot_width: self.plot_width,
            label_space: self.label_space,
            tick_unit,
        })
    }
}

fn check_extent(axis: &str, plot: i32, label_space: i32) -> DrawerResult<()> {
    let extent = label_space
        .checked_mul(2)
        .and_then(|margins| margins.checked_add(plot));
    match extent {
        Some(extent) if extent <= MAX_WIDGET_EXTENT_PX => Ok(()),
        _ => Err(DrawerError::InvalidConfig(format!(
            "widget {axis} ({plot} + 2 * {label_space}) exceeds {MAX_WIDGET_EXTENT_PX} px"
        ))),
    }
}

impl TryFrom<PlotConfigBuilder> for PlotConfig {
    type Error = DrawerError;

    fn try_from(builder: PlotConfigBuilder) -> DrawerResult<Self> {
        builder.build()
    }
}

impl From<PlotConfig> for PlotConfigBuilder {
    fn from(config: PlotConfig) -> Self {
        Self {
            plot_height: config.plot_height,
            plot_width: config.plot_width,
            label_space: config.label_space,
            tick_unit: Some(config.tick_unit),
        }
    }
}
