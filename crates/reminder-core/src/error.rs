use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Por favor, insira um número válido")]
    NotANumber(String),

    #[error("O limite deve ser maior que zero")]
    NonPositiveLimit(i64),
}

pub type Result<T> = std::result::Result<T, CoreError>;
