use regex::Regex;

/// One image to download, paired with its derived filename stem
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageTask {
    pub url: String,
    pub prefix: String,
}

fn coord_pattern() -> Regex {
    Regex::new(r"\*What are its coordinates on the map:\*\s*(\d+)_(\d+)").unwrap()
}

fn difficulty_pattern() -> Regex {
    Regex::new(r"\*What would you rate its difficulty/obscurity out of 10:\*\s*(\d+)").unwrap()
}

fn image_pattern() -> Regex {
    Regex::new(r"!\[Image\]\((https://github\.com/user-attachments/assets/[^\s)]+)\)").unwrap()
}

/// Extract download tasks from one issue body.
///
/// An issue qualifies only when coordinates, a difficulty rating, and at
/// least one attachment link are all present; each miss skips just this
/// issue. A qualifying issue yields one task per attachment link, every task
/// sharing the `{x}_{y}_{difficulty}` prefix.
pub fn extract_image_tasks(body: &str) -> Vec<ImageTask> {
    let (coord_x, coord_y) = match coord_pattern().captures(body) {
        Some(caps) => (caps[1].to_string(), caps[2].to_string()),
        None => {
            println!("No coordinates found in this issue. Skipping...");
            return Vec::new();
        }
    };
    println!("Found coordinates: {}_{}", coord_x, coord_y);

    let difficulty = match difficulty_pattern().captures(body) {
        Some(caps) => caps[1].to_string(),
        None => {
            println!("No difficulty rating found. Skipping...");
            return Vec::new();
        }
    };

    let prefix = format!("{}_{}_{}", coord_x, coord_y, difficulty);

    let found_images: Vec<&str> = image_pattern()
        .captures_iter(body)
        .map(|caps| caps.get(1).unwrap().as_str())
        .collect();

    if found_images.is_empty() {
        println!("No valid images found in this issue.");
        return Vec::new();
    }
    println!("Extracted image URLs: {:?}", found_images);

    found_images
        .into_iter()
        .map(|url| ImageTask {
            url: url.to_string(),
            prefix: prefix.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(coords: Option<&str>, difficulty: Option<&str>, images: &[&str]) -> String {
        let mut body = String::from("### New charm submission\n\n");
        if let Some(c) = coords {
            body.push_str(&format!("*What are its coordinates on the map:* {}\n", c));
        }
        if let Some(d) = difficulty {
            body.push_str(&format!(
                "*What would you rate its difficulty/obscurity out of 10:* {}\n",
                d
            ));
        }
        for url in images {
            body.push_str(&format!("![Image]({})\n", url));
        }
        body
    }

    #[test]
    fn complete_body_yields_one_task_per_image() {
        let body = body(
            Some("12_34"),
            Some("7"),
            &[
                "https://github.com/user-attachments/assets/aaa",
                "https://github.com/user-attachments/assets/bbb",
            ],
        );

        let tasks = extract_image_tasks(&body);
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].url, "https://github.com/user-attachments/assets/aaa");
        assert_eq!(tasks[1].url, "https://github.com/user-attachments/assets/bbb");
        assert!(tasks.iter().all(|t| t.prefix == "12_34_7"));
    }

    #[test]
    fn missing_coordinates_skips_issue() {
        let body = body(
            None,
            Some("7"),
            &["https://github.com/user-attachments/assets/aaa"],
        );
        assert!(extract_image_tasks(&body).is_empty());
    }

    #[test]
    fn missing_difficulty_skips_issue() {
        let body = body(
            Some("12_34"),
            None,
            &["https://github.com/user-attachments/assets/aaa"],
        );
        assert!(extract_image_tasks(&body).is_empty());
    }

    #[test]
    fn missing_images_skips_issue() {
        let body = body(Some("12_34"), Some("7"), &[]);
        assert!(extract_image_tasks(&body).is_empty());
    }

    #[test]
    fn foreign_image_hosts_are_ignored() {
        let body = body(
            Some("1_2"),
            Some("3"),
            &["https://example.com/assets/evil.png"],
        );
        assert!(extract_image_tasks(&body).is_empty());
    }

    #[test]
    fn prompt_text_must_match_exactly() {
        let body = "Coordinates: 12_34\nDifficulty: 7\n\
                    ![Image](https://github.com/user-attachments/assets/aaa)";
        assert!(extract_image_tasks(body).is_empty());
    }
}
