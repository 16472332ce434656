#[doc = r#"
    Kind of timeline entry. Decides which group a bar is drawn in and what colour it gets.
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EventCategory {
    Internship,
    Funding,
    Unfunded,
    Teaching,
    Conference,
    Deadline,
}

impl EventCategory {
    pub const ALL: [EventCategory; 6] = [
        EventCategory::Internship,
        EventCategory::Funding,
        EventCategory::Unfunded,
        EventCategory::Teaching,
        EventCategory::Conference,
        EventCategory::Deadline,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            EventCategory::Internship => "Internship",
            EventCategory::Funding => "Funding",
            EventCategory::Unfunded => "Unfunded",
            EventCategory::Teaching => "Teaching",
            EventCategory::Conference => "Conference",
            EventCategory::Deadline => "Deadline",
        }
    }

    /* Rows are grouped top to bottom in this order */
    pub fn group_order(self) -> u8 {
        match self {
            EventCategory::Internship => 0,
            EventCategory::Funding => 1,
            EventCategory::Unfunded => 2,
            EventCategory::Teaching => 3,
            EventCategory::Conference => 4,
            EventCategory::Deadline => 5,
        }
    }

    #[doc = "Bar fill colour, taken from the tab20 palette"]
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            EventCategory::Internship => (31, 119, 180),
            EventCategory::Funding => (44, 160, 44),
            EventCategory::Unfunded => (255, 152, 150),
            EventCategory::Teaching => (255, 127, 14),
            EventCategory::Conference => (148, 103, 189),
            EventCategory::Deadline => (214, 39, 40),
        }
    }
}
