use printer::config::Configuration;

const INFO: &str = include_str!("../../docs/docs.txt");

/// Print the documentation topic closest to the input, or the list of all
/// topics if there is no input
pub fn info(input: Option<&str>) {
    print!("{}", lookup(input));
}

fn lookup(input: Option<&str>) -> String {
    let info = topics();
    assert!(!info.is_empty(), "Unable to get documentation");

    let input = if let Some(input) = input {
        input
    } else {
        return all_topics(&info);
    };

    if let Ok(idx) = input.parse::<usize>() {
        return if idx > info.len() {
            format!(
                "Unable to get numbered documentation entry \"{}\", maximum number is {}\n",
                input,
                info.len()
            )
        } else if idx == 0 {
            String::from("Unable to get documentation entry 0, minimum value is 1\n")
        } else {
            topic(&info[idx - 1])
        };
    }

    let input = input.to_lowercase();

    // search for exact string match
    if let Some(found) = info.iter().find(|(name, _)| name.to_lowercase() == input) {
        return topic(found);
    }

    // try fuzzy string matching
    let (idx, sim) = info
        .iter()
        .enumerate()
        .map(|(idx, (name, _))| {
            let name = name.to_lowercase();

            (idx, strsim::normalized_damerau_levenshtein(&name, &input))
        })
        .fold(
            // find the largest similarity
            (0, f64::NAN),
            |acc, (idx, sim)| {
                if sim > acc.1 || acc.1.is_nan() {
                    (idx, sim)
                } else {
                    acc
                }
            },
        );

    if sim < 0.25 {
        String::from("Unable to find relevant documentation topic\n")
    } else {
        format!(
            "Found topic with {}% similarity\n{}",
            (sim * 100.0) as i32,
            topic(&info[idx])
        )
    }
}

/// Format a single documentation message
fn topic(info: &(String, String)) -> String {
    format!("Documentation on {}:\n{}\n", info.0, info.1)
}

/// Format the numbered names of all available documentation topics
fn all_topics(info: &[(String, String)]) -> String {
    let mut out = String::from("Available documentation topics:\n");

    for (idx, (name, _)) in info.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", idx + 1, name));
    }

    out
}

/// Parse the documentation file and append the generated options topic
fn topics() -> Vec<(String, String)> {
    let remove_carriage_return = INFO.chars().filter(|&c| c != '\r').collect::<String>();

    let remove_comments = remove_carriage_return
        .lines()
        .filter(|s| !s.starts_with('#'))
        .collect::<Vec<_>>();
    let remove_comments = remove_comments.join("\n");
    let remove_comments = remove_comments.trim();

    let mut topics = remove_comments
        .split("\n\n-")
        .filter_map(|s| {
            s.split_once('\n').map(|(name, content)| {
                (
                    name.trim_start_matches("- ").trim().to_string(),
                    content.to_string(),
                )
            })
        })
        .collect::<Vec<_>>();

    topics.push((String::from("options"), options()));
    topics
}

/// Describe every printer option with its default, from the configuration
/// itself so it cannot go out of date
fn options() -> String {
    let config = Configuration::new();
    let mut out = String::from("Set with `--set name=value`, a bare `--set name` means true.\n");

    for flag in config.iter() {
        out.push_str(&format!(
            "  {} ({}, default {})\n      {}\n",
            flag.name(),
            flag.kind_description(),
            flag.default_value(),
            flag.help_text()
        ));
    }

    out.trim_end().to_string()
}
