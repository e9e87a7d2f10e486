//! Browser rendering
//!
//! Fetches the dataset, measures the container, mounts the SVGs and wires
//! up the tooltip. The most recent chart is kept alive in thread-local
//! storage so its listeners survive after the draw future completes.

pub mod fetch;
pub mod svg;
pub mod tooltip;

use std::cell::RefCell;

use web_sys::{Document, Element};

use crate::chart_layout::{ChartLayoutEngine, DisplayList, Viewport};
use crate::config::ChartConfig;
use crate::error::{ChartError, Result};

pub use fetch::fetch_dataset;
pub use svg::{mount_display_list, MountedSvgs};
pub use tooltip::TooltipHandlers;

thread_local! {
    static ACTIVE_CHART: RefCell<Option<TreemapChart>> = const { RefCell::new(None) };
}

/// A chart mounted in the page
///
/// Dropping it removes both SVGs and detaches the tooltip listeners.
pub struct TreemapChart {
    display_list: DisplayList,
    svgs: MountedSvgs,
    _handlers: TooltipHandlers,
}

impl TreemapChart {
    /// Fetch the dataset and draw it into the configured containers
    pub async fn draw(config: &ChartConfig) -> Result<Self> {
        config.validate()?;
        let document = document()?;
        let container = element_by_id(&document, &config.svg_container_id)?;
        let tooltip_container = element_by_id(&document, &config.tooltip_container_id)?;

        let data = fetch_dataset(&config.data_url).await?;

        let list = ChartLayoutEngine::new(config).compute_layout(&data, container_viewport(&container));
        Self::mount(&document, &container, &tooltip_container, list, config)
    }

    /// Mount an already computed display list
    pub fn mount(
        document: &Document,
        container: &Element,
        tooltip_container: &Element,
        display_list: DisplayList,
        config: &ChartConfig,
    ) -> Result<Self> {
        let svgs = mount_display_list(document, container, &display_list)?;
        let handlers = match TooltipHandlers::attach(
            document,
            &svgs.treemap,
            tooltip_container,
            config.tooltip,
        ) {
            Ok(handlers) => handlers,
            Err(e) => {
                svgs.remove();
                return Err(e);
            }
        };

        Ok(Self {
            display_list,
            svgs,
            _handlers: handlers,
        })
    }

    pub fn display_list(&self) -> &DisplayList {
        &self.display_list
    }
}

impl Drop for TreemapChart {
    fn drop(&mut self) {
        self.svgs.remove();
    }
}

/// Keep `chart` alive, replacing (and unmounting) any previous one
pub fn set_active_chart(chart: TreemapChart) {
    let previous = ACTIVE_CHART.with(|slot| slot.borrow_mut().replace(chart));
    drop(previous);
}

/// Unmount the active chart, if any
pub fn clear_active_chart() -> bool {
    let previous = ACTIVE_CHART.with(|slot| slot.borrow_mut().take());
    previous.is_some()
}

/// Size of the container the chart is drawn into
pub fn container_viewport(container: &Element) -> Viewport {
    let rect = container.get_bounding_client_rect();
    Viewport::new(rect.width(), rect.height())
}

fn document() -> Result<Document> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| ChartError::Dom("No document".to_string()))
}

fn element_by_id(document: &Document, id: &str) -> Result<Element> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| ChartError::MissingElement(id.to_string()))
}
