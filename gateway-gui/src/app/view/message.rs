use crate::transaction::Field;

#[derive(Debug, Clone)]
pub enum Message {
    FieldEdited(Field, String),
    Submit,
    /// Follow an in-app link, for example `/deposit/how-to/`.
    Navigate(String),
}
