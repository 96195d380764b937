use thiserror::Error;

#[derive(Error, Debug)]
pub enum HelpdeskError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(String),

    #[error("Ticket not found: {0}")]
    TicketNotFound(String),

    #[error("Duplicate ticket id: {0}")]
    DuplicateTicket(String),
}
