/// Collection holding payment cards.
pub const CARDS_COLLECTION: &str = "cards";

/// Collection holding savings goals.
pub const GOALS_COLLECTION: &str = "goals";

/// Collection holding bills.
pub const BILLS_COLLECTION: &str = "bills";

/// Collection holding transactions.
pub const TRANSACTIONS_COLLECTION: &str = "transactions";

/// Collection holding budgets.
pub const BUDGETS_COLLECTION: &str = "budgets";

/// Collection holding notifications.
pub const NOTIFICATIONS_COLLECTION: &str = "notifications";

/// Collection holding the single user profile document.
pub const PROFILE_COLLECTION: &str = "userProfile";

/// Fixed identifier of the user profile document.
pub const PROFILE_DOCUMENT_ID: &str = "current";

/// Store-assigned creation timestamp field.
pub const CREATED_AT_FIELD: &str = "createdAt";

/// Store-assigned last-write timestamp field.
pub const UPDATED_AT_FIELD: &str = "updatedAt";

/// Field carrying the document identifier once converted to a record.
pub const ID_FIELD: &str = "id";
