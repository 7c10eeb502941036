// Saved estimates ("proyectos"). Each row belongs to the user who created it;
// every read and delete is scoped to the session's user.

pub mod handlers;
pub mod repository;
