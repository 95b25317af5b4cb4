pub mod server_card;
