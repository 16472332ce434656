use crate::common::*;

use crate::model::{
    configs::chart_config::*,
    timeline::{timeline_event::*, timeline_layout::*},
};
use crate::service::chart_service_impl::*;
use crate::traits::service_traits::chart_service::*;

#[derive(Debug, new)]
pub struct ChartController<C: ChartService> {
    chart_service: C,
}

impl<C: ChartService> ChartController<C> {
    #[doc = r#"
        Renders the timeline once and writes it to the configured image path.

        No retry: the first failure is returned to the caller, which aborts the run.

        # Returns
        * `anyhow::Result<TimelineLayout>` - the layout that was drawn
    "#]
    pub async fn main_task(
        &self,
        events: &[TimelineEvent],
        today: NaiveDate,
        chart_config: &ChartConfig,
    ) -> anyhow::Result<TimelineLayout> {
        info!(
            "Rendering {} timeline events to {:?} (today = {})",
            events.len(),
            chart_config.output_path(),
            today
        );

        let layout: TimelineLayout = self
            .chart_service
            .generate_timeline_chart(events, today, chart_config)
            .await
            .context("[ChartController->main_task] failed to build the timeline chart")?;

        Ok(layout)
    }
}

#[doc = r#"
    Chart builder entry point shared by the binary and the tests.

    # Arguments
    * `lookup` - environment key lookup, only `TIMELINE_IMAGE_PATH` is read
    * `events` - timeline entries to draw
    * `today`  - date of the today marker
"#]
pub async fn run_chart_builder<F>(
    lookup: &F,
    events: &[TimelineEvent],
    today: NaiveDate,
) -> anyhow::Result<TimelineLayout>
where
    F: Fn(&str) -> Option<String>,
{
    let chart_config: ChartConfig = ChartConfig::from_lookup(lookup);
    let chart_controller: ChartController<ChartServiceImpl> =
        ChartController::new(ChartServiceImpl::new());

    chart_controller.main_task(events, today, &chart_config).await
}
