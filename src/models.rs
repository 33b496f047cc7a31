use sokoban_rules::{Grid, Rejection, Score};

pub struct GameRenderState {
    pub board: Grid,
    pub won: bool,
    pub score: Score,
    pub solution: String,
    pub rejection: Option<Rejection>,
}
