use crate::models::Activity;

// Fixed set loaded at process start.
pub fn seed_activities() -> Vec<(String, Activity)> {
    vec![
        (
            "Chess Club".to_string(),
            Activity::new(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
            )
            .with_participants(&["michael@mergington.edu", "daniel@mergington.edu"]),
        ),
        (
            "Programming Class".to_string(),
            Activity::new(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
            )
            .with_participants(&["emma@mergington.edu", "sophia@mergington.edu"]),
        ),
        (
            "Gym Class".to_string(),
            Activity::new(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
            )
            .with_participants(&["john@mergington.edu", "olivia@mergington.edu"]),
        ),
        (
            "Robotics Team".to_string(),
            Activity::new(
                "Build and program robots for competitions",
                "Wednesdays, 3:30 PM - 5:30 PM",
                12,
            )
            .with_participants(&["carmen@mergington.edu"]),
        ),
        (
            "Drama Society".to_string(),
            Activity::new(
                "Rehearsals, workshops, and seasonal plays",
                "Fridays, 4:00 PM - 6:00 PM",
                10,
            ),
        ),
    ]
}
