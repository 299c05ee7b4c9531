use std::{
    fs,
    io::{self, Write},
};

use crate::{OutputFormat, Result, Solution, TouristOptions};

/// Writes the solution to `--output`, or stdout when unset. An existing
/// output file is overwritten, never appended to.
pub fn write_solution(solution: &Solution, options: &TouristOptions) -> Result<()> {
    let rendered = render_solution(solution, options.format)?;
    match options.output_path() {
        Some(path) => {
            fs::write(path, rendered)?;
            log::info!("output: wrote {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

pub fn render_solution(solution: &Solution, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(solution)),
        OutputFormat::Json => {
            let mut rendered = serde_json::to_string_pretty(solution)?;
            rendered.push('\n');
            Ok(rendered)
        }
    }
}

fn render_text(solution: &Solution) -> String {
    if !solution.has_tour() {
        return format!("no tour found from {}\n", solution.start);
    }

    let mut rendered = String::from("tour: ");
    for name in &solution.tour {
        rendered.push_str(name);
        rendered.push_str(" -> ");
    }
    rendered.push_str(&solution.start);
    rendered.push('\n');
    rendered.push_str(&solution.output_paths.to_string());
    rendered
}

#[cfg(test)]
mod tests {
    use super::render_solution;
    use crate::{Dataset, OutputFormat, OutputStore, Solution, TouristOptions, solve_longest_tour};

    fn solve(dataset: &Dataset) -> Solution {
        solve_longest_tour(dataset, &TouristOptions::default(), &OutputStore::new())
            .expect("solve")
    }

    fn triangle() -> Dataset {
        Dataset::new("triangle")
            .with_location("A", 0.0, 0.0, true)
            .with_location("B", 0.0, 1.0, false)
            .with_location("C", 1.0, 0.0, false)
            .with_path("A", "B")
            .with_path("B", "C")
            .with_path("C", "A")
    }

    #[test]
    fn text_lists_closed_tour_then_edges() {
        let rendered = render_solution(&solve(&triangle()), OutputFormat::Text).expect("render");
        assert_eq!(rendered, "tour: A -> C -> B -> A\nC,A\nB,C\nA,B\n");
    }

    #[test]
    fn text_reports_missing_tour() {
        let dataset = Dataset::new("lonely").with_location("A", 0.0, 0.0, true);
        let rendered = render_solution(&solve(&dataset), OutputFormat::Text).expect("render");
        assert_eq!(rendered, "no tour found from A\n");
    }

    #[test]
    fn json_carries_tour_edges_and_metrics() {
        let rendered = render_solution(&solve(&triangle()), OutputFormat::Json).expect("render");
        let value: serde_json::Value = serde_json::from_str(&rendered).expect("valid json");

        assert_eq!(value["outcome"], "tour");
        assert_eq!(value["tour"], serde_json::json!(["A", "C", "B"]));
        assert_eq!(
            value["output_paths"][0],
            serde_json::json!({"start_location_name": "C", "end_location_name": "A"})
        );
        assert_eq!(value["metrics"]["legs"], 3);
    }
}
