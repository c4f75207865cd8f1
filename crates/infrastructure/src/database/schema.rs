// Database schema for the user service
diesel::table! {
    users (id) {
        id -> Integer,    // Caller-supplied primary key, never auto-generated
        name -> Text,
    }
}
