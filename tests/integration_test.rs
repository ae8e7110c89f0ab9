use assert_cmd::Command;
use predicates::prelude::*;

// Each test gets its own catalog database so parallel runs never share a file.
fn flag_quiz(test_name: &str) -> Command {
    let db_path = std::env::temp_dir().join(format!(
        "flag_quiz_{}_{}.sqlite",
        test_name,
        std::process::id()
    ));
    let _ = std::fs::remove_file(&db_path);
    let mut cmd = Command::cargo_bin("flag_quiz").unwrap();
    cmd.env("FLAG_QUIZ_DB", db_path);
    cmd
}

// Test that the program starts and shows the welcome banner
#[test]
fn test_program_starts() {
    let mut cmd = flag_quiz("test_program_starts");

    cmd.write_stdin("quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome to Flag Quiz"));
}

// Test that quit command exits gracefully
#[test]
fn test_quit_command() {
    let mut cmd = flag_quiz("test_quit_command");

    cmd.write_stdin("quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Goodbye!"));
}

// Test exit command also works
#[test]
fn test_exit_command() {
    let mut cmd = flag_quiz("test_exit_command");

    cmd.write_stdin("exit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Goodbye!"));
}

// Test that the default options are classic / multiple-choice
#[test]
fn test_default_options() {
    let mut cmd = flag_quiz("test_default_options");

    cmd.write_stdin("options\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Mode: classic"))
        .stdout(predicate::str::contains("Input: multiple-choice"));
}

// Test switching the game mode
#[test]
fn test_mode_command() {
    let mut cmd = flag_quiz("test_mode_command");

    cmd.write_stdin("mode endless\noptions\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Mode: endless"));
}

// Test switching the input mode
#[test]
fn test_input_command() {
    let mut cmd = flag_quiz("test_input_command");

    cmd.write_stdin("input text\noptions\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Input: text"));
}

// Test invalid mode shows an error message
#[test]
fn test_invalid_mode() {
    let mut cmd = flag_quiz("test_invalid_mode");

    cmd.write_stdin("mode alien\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown mode 'alien'"));
}

// Test invalid command shows an error message
#[test]
fn test_invalid_command() {
    let mut cmd = flag_quiz("test_invalid_command");

    cmd.write_stdin("notacommand\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown command"));
}

// Test that list shows the seeded catalog
#[test]
fn test_list_command() {
    let mut cmd = flag_quiz("test_list_command");

    cmd.write_stdin("list\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Catalog ("))
        .stdout(predicate::str::contains("France (FR)"))
        .stdout(predicate::str::contains("Chad (TD)"));
}

// Test case insensitivity for menu commands
#[test]
fn test_case_insensitive_commands() {
    let mut cmd = flag_quiz("test_case_insensitive_commands");

    cmd.write_stdin("OPTIONS\nQUIT\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Mode: classic"));
}

// Test that passing in classic mode ends the game with a summary
#[test]
fn test_classic_game_ends_on_incorrect_answer() {
    let mut cmd = flag_quiz("test_classic_game_ends_on_incorrect_answer");

    cmd.write_stdin("start\npass\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("ROUND 1"))
        .stdout(predicate::str::contains("Whose flag is this?"))
        .stdout(predicate::str::contains("Game over!"))
        .stdout(predicate::str::contains("SUMMARY"))
        .stdout(predicate::str::contains("Total score:"));
}

// Test ending an endless game with the end command
#[test]
fn test_endless_game_end_command() {
    let mut cmd = flag_quiz("test_endless_game_end_command");

    cmd.write_stdin("mode endless\nstart\npass\nend\ny\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("ROUND 2"))
        .stdout(predicate::str::contains("End the game? (y/n)"))
        .stdout(predicate::str::contains("SUMMARY"));
}

// Test that a text-mode game accepts free-form input
#[test]
fn test_text_mode_game_round() {
    let mut cmd = flag_quiz("test_text_mode_game_round");

    cmd.write_stdin("input text\nstart\nnot a real country\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("It's the flag of"))
        .stdout(predicate::str::contains("Game over!"));
}

// Test that an invalid option number reprompts instead of recording
#[test]
fn test_multiple_choice_rejects_out_of_range_numbers() {
    let mut cmd = flag_quiz("test_multiple_choice_rejects_out_of_range_numbers");

    cmd.write_stdin("start\n9\npass\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter a number between 1 and 4"));
}
