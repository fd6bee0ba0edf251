pub mod generate_dialogue;
