use serde::Serialize;

#[derive(Serialize, Debug)]
pub struct Health {
    pub status: &'static str,
    pub message: &'static str,
}

impl Health {
    pub fn ok() -> Self {
        Self { status: "OK", message: "GreenTrade Hub API is running" }
    }
}
