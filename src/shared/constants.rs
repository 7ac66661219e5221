/// How many records each "recent" dashboard panel returns
pub const DASHBOARD_RECENT_LIMIT: i64 = 5;
