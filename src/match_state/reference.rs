//! Closed reference lists the hosting layer validates user input against.
//!
//! The engine itself never consults these; by the time a request reaches it,
//! team and venue membership has already been checked.

/// IPL franchises known to the trained models.
pub const TEAMS: [&str; 10] = [
    "Chennai Super Kings",
    "Delhi Capitals",
    "Gujarat Titans",
    "Kolkata Knight Riders",
    "Lucknow Super Giants",
    "Mumbai Indians",
    "Punjab Kings",
    "Rajasthan Royals",
    "Royal Challengers Bengaluru",
    "Sunrisers Hyderabad",
];

/// Venue cities seen in the training data ("Unknown" included).
pub const VENUES: [&str; 34] = [
    "Ahmedabad",
    "Bangalore",
    "Bengaluru",
    "Cape Town",
    "Centurion",
    "Chandigarh",
    "Chennai",
    "Cuttack",
    "Delhi",
    "Dharamsala",
    "Durban",
    "East London",
    "Guwahati",
    "Hyderabad",
    "Indore",
    "Jaipur",
    "Johannesburg",
    "Kanpur",
    "Kimberley",
    "Kolkata",
    "Lucknow",
    "Mohali",
    "Mumbai",
    "Nagpur",
    "Navi Mumbai",
    "New Chandigarh",
    "Port Elizabeth",
    "Pune",
    "Raipur",
    "Rajkot",
    "Ranchi",
    "Sharjah",
    "Unknown",
    "Visakhapatnam",
];

pub fn is_known_team(name: &str) -> bool {
    TEAMS.contains(&name)
}

pub fn is_known_venue(name: &str) -> bool {
    VENUES.contains(&name)
}
