//! Root page listing the available API routes.

use axum::response::Html;

/// Route listing served at `/`
pub const ROUTE_LISTING: &str = "Available Routes:<br/>\
/api/v1.0/precipitation <br/>\
Precipitation data for the last year<br/>\
/api/v1.0/stations <br/>\
List of weather stations<br/>\
/api/v1.0/tobs <br/>\
Temperature observations for the last year at the most active station<br/>\
/api/v1.0/start_date <br/>\
Temperature statistics from a specific start date<br/>\
/api/v1.0/start_date/end_date<br/>\
Temperature statistics for a date range<br/>\
start_date and end_date format: YYYY-MM-DD <br/>";

/// Handle GET / requests
pub async fn home_handler() -> Html<&'static str> {
    Html(ROUTE_LISTING)
}
