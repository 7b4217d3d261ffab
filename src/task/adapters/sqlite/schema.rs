//! Diesel schema for task persistence.

diesel::table! {
    /// Task records.
    tasks (id) {
        /// Store-assigned task identifier.
        id -> Integer,
        /// Task name.
        name -> Text,
        /// Creation timestamp in UTC.
        created_at -> Timestamp,
        /// Task start, without offset.
        start_at -> Timestamp,
        /// Task end, without offset.
        end_at -> Timestamp,
        /// Duration derived from start and end, in minutes.
        duration_minutes -> Double,
    }
}
