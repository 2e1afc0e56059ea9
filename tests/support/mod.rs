pub mod fen;
