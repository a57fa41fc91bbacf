use bikeshare_stats::core::prompt::separator;
use bikeshare_stats::{BikeshareError, DatasetConfig, FilterPrompt, Session};
use std::io::Cursor;
use tempfile::TempDir;

const CHICAGO_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
1,2017-03-06 08:10:00,2017-03-06 08:11:40,100,Clark St & Elm St,Canal St & Adams St,Subscriber,Male,1990.0
2,2017-03-06 08:20:00,2017-03-06 08:23:20,200,Clark St & Elm St,Canal St & Adams St,Customer,,
3,2017-03-07 17:05:00,2017-03-07 17:10:00,300,Streeter Dr & Grand Ave,Lake Shore Dr & Monroe St,Subscriber,Female,1985.0
4,2017-04-03 09:00:00,2017-04-03 09:16:40,1000,Streeter Dr & Grand Ave,Clark St & Elm St,Subscriber,Female,1990.0
";

const WASHINGTON_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type
1,2017-06-21 08:36:34,2017-06-21 08:44:43,489.25,14th & Belmont St NW,15th & K St NW,Subscriber
2,2017-06-22 09:00:00,2017-06-22 09:10:00,1000.5,14th & Belmont St NW,15th & K St NW,Customer
";

fn data_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("chicago.csv"), CHICAGO_CSV).unwrap();
    std::fs::write(dir.path().join("washington.csv"), WASHINGTON_CSV).unwrap();
    dir
}

fn run_script(dir: &TempDir, script: &str) -> (Result<usize, BikeshareError>, String) {
    let session = Session::new(DatasetConfig::new(dir.path()));
    let mut prompt = FilterPrompt::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
    let result = session.run(&mut prompt);
    let output = String::from_utf8(prompt.into_output()).unwrap();
    (result, output)
}

#[test]
fn test_full_session_for_march() {
    let dir = data_dir();
    let (result, output) = run_script(&dir, "chicago\nmarch\nall\nno\n");

    assert_eq!(result.unwrap(), 1);

    assert!(output.contains("Calculating The Most Frequent Times of Travel..."));
    assert!(output.contains("The most common month is march."));
    assert!(output.contains("The most common day is Monday."));
    assert!(output.contains("The most common start hour is 8."));

    assert!(output.contains("The most commonly used start station is Clark St & Elm St."));
    assert!(output.contains("The most commonly used end station is Canal St & Adams St."));
    assert!(output.contains("The most frequent trip is Clark St & Elm St -> Canal St & Adams St."));

    // 只有三月的 100 + 200 + 300
    assert!(output.contains("Total travel time is 600 seconds."));
    assert!(output.contains("Mean travel time is 200.00 seconds."));

    assert!(output.contains("Counts of user types is 2."));
    assert!(output.contains("Counts of gender is 2."));
    assert!(output.contains("The earliest year of birth is 1985."));
    assert!(output.contains("The most recent year of birth is 1990."));
    assert!(output.contains("The most common year of birth is 1985."));

    // 篩選後一條分隔線 + 四個區段各一條
    assert_eq!(output.matches(&separator()).count(), 5);
    assert_eq!(output.matches("This took ").count(), 4);
    assert!(output.contains("Would you like to restart? Enter yes or no."));
}

#[test]
fn test_restart_loops_until_declined() {
    let dir = data_dir();
    let script = "chicago\nall\nall\nYes\nwashington\njune\nall\nnope\n";
    let (result, output) = run_script(&dir, script);

    assert_eq!(result.unwrap(), 2);
    assert!(output.contains("Total travel time is 1,600 seconds."));
    assert!(output.contains("Total travel time is 1,489.75 seconds."));
    assert!(output.contains("No gender column in the data!"));
    assert!(output.contains("No birth year column in the data!"));
}

#[test]
fn test_invalid_inputs_are_reprompted() {
    let dir = data_dir();
    let script = "boston\nCHICAGO\nmarchy\nApril\nsomeday\nmonday\n\n";
    let (result, output) = run_script(&dir, script);

    assert_eq!(result.unwrap(), 1);
    assert_eq!(output.matches("to analyze:").count(), 2);
    assert!(output.contains("The most common month is april."));
    assert!(output.contains("Total travel time is 1,000 seconds."));
}

#[test]
fn test_no_matching_trips() {
    let dir = data_dir();
    let (result, output) = run_script(&dir, "chicago\ndecember\nall\nno\n");

    assert_eq!(result.unwrap(), 1);
    assert_eq!(output.matches("No trips match the selected filters.").count(), 4);
}

#[test]
fn test_missing_city_file_is_fatal() {
    let dir = data_dir();
    let (result, _output) = run_script(&dir, "new york city\nall\nall\nno\n");

    match result.unwrap_err() {
        BikeshareError::IoError(e) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_same_selection_reports_identically() {
    let dir = data_dir();
    let (_, first) = run_script(&dir, "chicago\nall\nall\nno\n");
    let (_, second) = run_script(&dir, "chicago\nall\nall\nno\n");

    let strip_timing = |text: &str| -> Vec<String> {
        text.lines()
            .filter(|line| !line.starts_with("This took "))
            .map(str::to_string)
            .collect()
    };
    assert_eq!(strip_timing(&first), strip_timing(&second));
}
