use crate::common::*;

use crate::enums::event_category::*;
use crate::model::{
    configs::chart_config::*,
    timeline::{timeline_event::*, timeline_layout::*},
};
use crate::traits::service_traits::chart_service::*;
use crate::utils_modules::{io_utils::*, time_utils::*};

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::{
    register_font,
    text_anchor::{HPos, Pos, VPos},
};

const FONT_FAMILY: &str = "sans-serif";
static FONT_BYTES: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans.ttf");

/* Text is rendered with the bundled font so the output never depends on system fonts */
static CHART_FONT: once_lazy<Result<(), String>> = once_lazy::new(|| {
    register_font(FONT_FAMILY, FontStyle::Normal, FONT_BYTES)
        .map_err(|_| "bundled chart font is unusable".to_string())
});

const LABEL_AREA_WIDTH: u32 = 190;
/* Legend column right of the plot, so it never hides a bar */
const LEGEND_AREA_WIDTH: u32 = 140;
const LEGEND_TOP: i32 = 70;
const LEGEND_ROW_HEIGHT: i32 = 22;
const BAR_HALF_HEIGHT: f64 = 0.25;
/* Narrowest bar drawn, wide enough for the fill to show inside the outline */
pub const MIN_BAR_PIXELS: f64 = 6.0;

#[derive(Debug, Clone, new)]
pub struct ChartServiceImpl;

fn render_error<E: std::fmt::Display>(err: E) -> TimelineError {
    TimelineError::Render(err.to_string())
}

fn category_color(category: EventCategory) -> RGBColor {
    let (r, g, b) = category.rgb();
    RGBColor(r, g, b)
}

#[doc = "Registers the bundled font with plotters, once per process"]
pub fn ensure_chart_font() -> Result<(), TimelineError> {
    CHART_FONT
        .as_ref()
        .map(|_| ())
        .map_err(|e| TimelineError::Render(e.clone()))
}

#[doc = r#"
    Draws `layout` onto `root`.

    Row 0 is drawn at the top, each row label sits left of the plot, quarterly ticks get a
    light grid line and a `%b %Y` label below the axis, and today is a red vertical line.
    The legend lives in its own column right of the plot.

    # Returns
    * `Result<Vec<(i32, i32)>, TimelineError>` - backend pixel at the centre of every bar, in row order
"#]
fn draw_timeline_on<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    layout: &TimelineLayout,
    chart_config: &ChartConfig,
) -> Result<Vec<(i32, i32)>, TimelineError> {
    root.fill(&WHITE).map_err(render_error)?;

    let (root_width, _) = root.dim_in_pixel();
    let (plot_area, legend_area) =
        root.split_horizontally(root_width.saturating_sub(LEGEND_AREA_WIDTH) as i32);

    let row_span: f64 = layout.row_count().max(1) as f64;
    let (x_start, x_end) = (layout.x_start(), layout.x_end());

    let mut chart = ChartBuilder::on(&plot_area)
        .caption(chart_config.title(), (FONT_FAMILY, 26).into_font())
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(LABEL_AREA_WIDTH)
        .build_cartesian_2d(x_start..x_end, 0f64..row_span)
        .map_err(render_error)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_labels(0)
        .y_labels(0)
        .x_desc("Date")
        .axis_desc_style((FONT_FAMILY, 16))
        .axis_style(BLACK.stroke_width(1))
        .draw()
        .map_err(render_error)?;

    /* Quarterly grid */
    let grid_color: RGBColor = RGBColor(210, 210, 210);
    for tick in layout.ticks() {
        let x: f64 = day_number(*tick);
        chart
            .draw_series(LineSeries::new(
                vec![(x, 0.0), (x, row_span)],
                grid_color.stroke_width(1),
            ))
            .map_err(render_error)?;
    }

    let (left_px, _) = chart.backend_coord(&(x_start, 0.0));
    let (right_px, _) = chart.backend_coord(&(x_end, 0.0));
    let days_per_pixel: f64 = (x_end - x_start) / (right_px - left_px).max(1) as f64;
    let min_bar_days: f64 = MIN_BAR_PIXELS * days_per_pixel;

    let mut bar_centres: Vec<(i32, i32)> = Vec::with_capacity(layout.row_count());
    for bar in layout.bars() {
        let y: f64 = row_span - *bar.row() as f64 - 0.5;
        let start: f64 = *bar.start_day();
        let end: f64 = bar.end_day().max(start + min_bar_days);
        let corners = [(start, y - BAR_HALF_HEIGHT), (end, y + BAR_HALF_HEIGHT)];

        chart
            .draw_series([
                Rectangle::new(corners, category_color(*bar.category()).filled()),
                Rectangle::new(corners, BLACK.stroke_width(1)),
            ])
            .map_err(render_error)?;

        bar_centres.push(chart.backend_coord(&((start + end) / 2.0, y)));
    }

    let today_x: f64 = layout.today_day();
    chart
        .draw_series(LineSeries::new(
            vec![(today_x, 0.0), (today_x, row_span)],
            RED.stroke_width(2),
        ))
        .map_err(render_error)?;

    let row_label_style = (FONT_FAMILY, 13)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Right, VPos::Center));
    for bar in layout.bars() {
        let y: f64 = row_span - *bar.row() as f64 - 0.5;
        let (px, py) = chart.backend_coord(&(x_start, y));
        root.draw(&Text::new(bar.label().clone(), (px - 8, py), row_label_style.clone()))
            .map_err(render_error)?;
    }

    let tick_label_style = (FONT_FAMILY, 12)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Top));
    for tick in layout.ticks() {
        let (px, py) = chart.backend_coord(&(day_number(*tick), 0.0));
        root.draw(&Text::new(format_tick_label(*tick), (px, py + 6), tick_label_style.clone()))
            .map_err(render_error)?;
    }

    /* Legend: one swatch per category present, then the today line */
    let legend_style = (FONT_FAMILY, 13)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Left, VPos::Center));
    let mut legend_y: i32 = LEGEND_TOP;
    for category in layout.categories() {
        let swatch = [(10, legend_y - 6), (28, legend_y + 6)];
        legend_area
            .draw(&Rectangle::new(swatch, category_color(category).filled()))
            .map_err(render_error)?;
        legend_area
            .draw(&Rectangle::new(swatch, BLACK.stroke_width(1)))
            .map_err(render_error)?;
        legend_area
            .draw(&Text::new(category.display_name(), (36, legend_y), legend_style.clone()))
            .map_err(render_error)?;
        legend_y += LEGEND_ROW_HEIGHT;
    }
    legend_area
        .draw(&PathElement::new(
            vec![(10, legend_y), (28, legend_y)],
            RED.stroke_width(2),
        ))
        .map_err(render_error)?;
    legend_area
        .draw(&Text::new("Today", (36, legend_y), legend_style.clone()))
        .map_err(render_error)?;

    Ok(bar_centres)
}

#[doc = "Rasterises `layout` into the PNG at `target`. Synchronous; runs on the blocking pool."]
fn draw_timeline(
    layout: &TimelineLayout,
    chart_config: &ChartConfig,
    target: &Path,
) -> Result<(), TimelineError> {
    let root = BitMapBackend::new(target, (*chart_config.width(), *chart_config.height()))
        .into_drawing_area();

    draw_timeline_on(&root, layout, chart_config)?;

    root.present()
        .map_err(|e| TimelineError::io(target, std::io::Error::other(e.to_string())))?;

    Ok(())
}

#[async_trait]
impl ChartService for ChartServiceImpl {
    async fn generate_timeline_chart(
        &self,
        events: &[TimelineEvent],
        today: NaiveDate,
        chart_config: &ChartConfig,
    ) -> Result<TimelineLayout, TimelineError> {
        let layout: TimelineLayout = TimelineLayout::plan(events, today)?;

        ensure_chart_font()?;

        /* Fail on an unwritable destination before any drawing happens */
        let output_path: &Path = chart_config.output_path();
        let staging: PathBuf = prepare_staging_file(output_path).await?;

        let draw_layout: TimelineLayout = layout.clone();
        let draw_config: ChartConfig = chart_config.clone();
        let draw_target: PathBuf = staging.clone();

        let handle: tokio::task::JoinHandle<Result<(), TimelineError>> =
            tokio::task::spawn_blocking(move || {
                draw_timeline(&draw_layout, &draw_config, &draw_target)
            });

        let drawing_result: Result<(), TimelineError> = match handle.await {
            Ok(result) => result,
            Err(e) => Err(TimelineError::Render(format!(
                "[ChartServiceImpl->generate_timeline_chart] drawing task failed: {}",
                e
            ))),
        };

        /* The previous chart stays in place unless the new one is complete */
        if let Err(e) = drawing_result {
            discard_staging_file(&staging);
            return Err(e);
        }

        commit_staging_file(&staging, output_path).await?;

        info!(
            "Timeline chart with {} bars generated successfully: {:?} ({} bytes)",
            layout.row_count(),
            output_path,
            file_len(output_path)
        );

        Ok(layout)
    }
}
