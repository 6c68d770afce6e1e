//! Content calendar.

use chrono::Weekday;

use factline_models::Category;

/// Fixed weekday → category table.
pub fn category_for(weekday: Weekday) -> Category {
    match weekday {
        Weekday::Mon => Category::Geography,
        Weekday::Tue => Category::History,
        Weekday::Wed => Category::Science,
        Weekday::Thu => Category::Technology,
        Weekday::Fri => Category::Psychology,
        Weekday::Sat => Category::Space,
        Weekday::Sun => Category::Trending,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calendar_table() {
        assert_eq!(category_for(Weekday::Mon), Category::Geography);
        assert_eq!(category_for(Weekday::Tue), Category::History);
        assert_eq!(category_for(Weekday::Wed), Category::Science);
        assert_eq!(category_for(Weekday::Thu), Category::Technology);
        assert_eq!(category_for(Weekday::Fri), Category::Psychology);
        assert_eq!(category_for(Weekday::Sat), Category::Space);
        assert_eq!(category_for(Weekday::Sun), Category::Trending);
    }
}
