use anyhow::{Context, Result};

pub fn split_csv(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn parse_seeds(input: &str) -> Result<Vec<u64>> {
    split_csv(input)
        .iter()
        .map(|token| {
            token
                .parse::<u64>()
                .with_context(|| format!("invalid seed {token:?}"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_csv_trims_and_drops_empty() {
        assert_eq!(split_csv(" smoke, ,stepper,"), vec!["smoke", "stepper"]);
        assert!(split_csv("").is_empty());
    }

    #[test]
    fn parse_seeds_reports_bad_token() {
        assert_eq!(parse_seeds("1,2, 3").unwrap(), vec![1, 2, 3]);
        let err = parse_seeds("1,x").unwrap_err();
        assert!(format!("{err:#}").contains("\"x\""));
    }
}
