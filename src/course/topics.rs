//! The fixed table of contents of the book.

pub const COURSE_TITLE: &str = "Python & Data for AI - Your First Steps into Machine Learning";
pub const COURSE_AUDIENCE: &str =
    "You - a complete beginner excited to learn Python for AI and Data Science!";
pub const COURSE_LEVEL: &str = "Beginner → Intermediate (We'll take it step by step)";
pub const COURSE_OUTCOME: &str = "By the end of this course, you'll confidently use Python to analyze data, create visualizations, and prepare datasets for machine learning - no prior coding experience needed!";

/// One chapter to generate.
#[derive(Debug, Clone, PartialEq)]
pub struct TopicSpec {
    pub name: &'static str,
    /// Scope notes handed to the model verbatim.
    pub guidance: &'static str,
    /// The capstone chapter also asks for a project section.
    pub capstone: bool,
}

pub fn course_topics() -> Vec<TopicSpec> {
    vec![
        TopicSpec {
            name: "Python Basics",
            guidance: "Installation and running code, REPL vs scripts, syntax and indentation, numbers and arithmetic, strings and f-strings, booleans, lists, tuples, dicts, sets, operators, conditionals, input/output, simple exceptions. Include examples mirroring data tasks such as parsing lines, counting frequencies, and simple data transforms.",
            capstone: false,
        },
        TopicSpec {
            name: "Variables, Loops, Functions",
            guidance: "Variable naming and scope, mutability vs immutability, for/while loops, break/continue, enumerate and zip, list/dict/set comprehensions, function definitions with type hints and docstrings, default args, *args/**kwargs, pure vs impure functions, recursion vs iteration at a basic level. Include patterns frequently used in data processing.",
            capstone: false,
        },
        TopicSpec {
            name: "Working with Data (CSV, JSON)",
            guidance: "File I/O with context managers, csv.reader/DictReader and writer/DictWriter, quoting and dialects, reading and writing JSON with json.loads/dumps, basic validation and error handling, summarizing tabular data (min, max, mean), merging small JSON structures. Include a small realistic CSV and JSON example pipeline.",
            capstone: false,
        },
        TopicSpec {
            name: "Numpy, Pandas",
            guidance: "NumPy arrays, dtype and shape, slicing and boolean indexing, broadcasting and vectorization, aggregation; Pandas Series/DataFrame, read_csv, dtypes, selecting rows/cols with loc/iloc, filtering, groupby-agg, joins/merges, handling missing values, apply vs vectorized ops, exporting to CSV. Emphasize tasks common in ML data prep.",
            capstone: false,
        },
        TopicSpec {
            name: "Plotting with Matplotlib",
            guidance: "Matplotlib basics, line, bar, scatter, histogram, box plot, styling and annotations, subplots and figure layout, saving figures, integrating with Pandas for quick plots. Include examples that visualize distributions and relationships relevant to ML datasets.",
            capstone: false,
        },
        TopicSpec {
            name: "Mini-Project: Student Marks Analyzer",
            guidance: "End-to-end project: read a marks CSV, compute per-student and per-subject statistics, handle missing values, derive grades, identify top/bottom performers, visualize distributions and trends with Matplotlib, export a summary report as CSV/JSON. Provide a project section with problem_statement, dataset description, milestones, rubric, and extensions.",
            capstone: true,
        },
    ]
}
