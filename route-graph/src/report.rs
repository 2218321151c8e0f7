//! Presentation of query answers.
//!
//! Runs the standard ten-question problem set against a graph and formats
//! the answers as text or JSON. This is the only place "no route" becomes
//! a message.

use std::fmt;

use serde::Serialize;

use crate::domain::Path;
use crate::planner::{NoRoute, RouteQuery, SearchError, StopLimit};

/// The answers to a set of questions.
#[derive(Debug, Default, Serialize)]
pub struct Report {
    pub answers: Vec<Answer>,
}

/// One answered question.
#[derive(Debug, Serialize)]
pub struct Answer {
    /// Position in the problem set, starting at 1
    pub number: usize,

    /// The question asked
    pub question: String,

    /// The answer, or the reason there is none
    pub output: String,

    /// The answer the problem set expects
    pub expected: String,

    /// Whether `output` matches `expected`
    pub passed: bool,

    /// Routes behind the answer, for enumeration questions
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub routes: Vec<String>,
}

impl Report {
    /// Answer the standard problem set for the sample network.
    pub fn problem_set(query: &RouteQuery<'_>) -> Self {
        let mut report = Report::default();

        for (route, expected) in [
            (&["A", "B", "C"][..], "9"),
            (&["A", "D"][..], "5"),
            (&["A", "D", "C"][..], "13"),
            (&["A", "E", "B", "C", "D"][..], "22"),
            (&["A", "E", "D"][..], "NO SUCH ROUTE"),
        ] {
            report.push(
                format!("The distance of the route {}", route.join("-")),
                distance_output(query.distance_along_route(route)),
                expected,
                Vec::new(),
            );
        }

        report.push_routes(
            "The number of trips starting at C and ending at C with a maximum of 3 stops",
            query.routes_between("C", "C", StopLimit::at_most(3)),
            "2",
        );
        report.push_routes(
            "The number of trips starting at A and ending at C with exactly 4 stops",
            query.routes_between("A", "C", StopLimit::exactly(4)),
            "3",
        );

        for (origin, destination) in [("A", "C"), ("B", "B")] {
            let result = query.shortest_route(origin, destination);
            let routes = result.iter().map(Path::to_string).collect();
            report.push(
                format!("The length of the shortest route from {origin} to {destination}"),
                search_output(result.map(|p| p.distance())),
                "9",
                routes,
            );
        }

        report.push_routes(
            "The number of different routes from C to C with a distance of less than 30",
            query.routes_under_distance("C", "C", 30),
            "7",
        );

        report
    }

    /// Returns true if every answer matched its expectation.
    pub fn all_passed(&self) -> bool {
        self.answers.iter().all(|a| a.passed)
    }

    /// Serialize the report as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    fn push(&mut self, question: String, output: String, expected: &str, routes: Vec<String>) {
        let passed = output == expected;
        self.answers.push(Answer {
            number: self.answers.len() + 1,
            question,
            output,
            expected: expected.to_string(),
            passed,
            routes,
        });
    }

    fn push_routes(
        &mut self,
        question: &str,
        result: Result<Vec<Path>, SearchError>,
        expected: &str,
    ) {
        let mut routes: Vec<String> = result
            .as_ref()
            .map(|paths| paths.iter().map(Path::to_string).collect())
            .unwrap_or_default();
        routes.sort();

        let output = search_output(result.map(|paths| paths.len()));
        self.push(question.to_string(), output, expected, routes);
    }
}

fn distance_output(result: Result<u64, NoRoute>) -> String {
    match result {
        Ok(distance) => distance.to_string(),
        Err(no_route) => no_route.to_string(),
    }
}

fn search_output<T: fmt::Display>(result: Result<T, SearchError>) -> String {
    match result {
        Ok(value) => value.to_string(),
        Err(e) => format!("error: {e}"),
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for answer in &self.answers {
            writeln!(f, "{answer}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.passed { "ok" } else { "FAILED" };
        write!(f, "#{}: {}: {}", self.number, self.question, self.output)?;
        if !self.passed {
            write!(f, " (expected {})", self.expected)?;
        }
        write!(f, " [{mark}]")?;
        if !self.routes.is_empty() {
            write!(f, " ({})", self.routes.join(", "))?;
        }
        Ok(())
    }
}
