use crate::common::*;

use crate::model::{configs::chart_config::*, timeline::{timeline_event::*, timeline_layout::*}};

#[async_trait]
pub trait ChartService: Send + Sync {
    #[doc = "
        Render the Gantt-style timeline of `events` and save it as a PNG image
        # Arguments
        * `events` - Timeline entries, one bar each
        * `today` - Date of the vertical today marker
        * `chart_config` - Output path, title and pixel size
    "]
    async fn generate_timeline_chart(
        &self,
        events: &[TimelineEvent],
        today: NaiveDate,
        chart_config: &ChartConfig,
    ) -> Result<TimelineLayout, TimelineError>;
}
