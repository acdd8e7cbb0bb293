//! Keyword-bucketed code generation.

use super::rules::{Predicate, ResolutionRule, RuleTable};
use crate::core::{CodeLanguage, CodeSnippet};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Returned when a bucket has no snippet for the selected language.
pub const NO_CODE_AVAILABLE: &str = "// No code available for this language";

/// Code generator form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeRequest {
    /// Natural language prompt.
    #[serde(default)]
    pub prompt: String,
    /// Target language.
    #[serde(default)]
    pub language: CodeLanguage,
}

impl CodeRequest {
    /// Creates a request.
    #[must_use]
    pub fn new(prompt: impl Into<String>, language: CodeLanguage) -> Self {
        Self {
            prompt: prompt.into(),
            language,
        }
    }
}

type Snippets = &'static [(CodeLanguage, &'static str)];

const HELLO_WORLD: Snippets = &[
    (
        CodeLanguage::JavaScript,
        r#"// Hello World in JavaScript
console.log("Hello, World!");"#,
    ),
    (
        CodeLanguage::Python,
        r#"# Hello World in Python
print("Hello, World!")"#,
    ),
    (
        CodeLanguage::Java,
        r#"// Hello World in Java
public class HelloWorld {
    public static void main(String[] args) {
        System.out.println("Hello, World!");
    }
}"#,
    ),
    (
        CodeLanguage::Cpp,
        r#"// Hello World in C++
#include <iostream>

int main() {
    std::cout << "Hello, World!" << std::endl;
    return 0;
}"#,
    ),
    (
        CodeLanguage::Rust,
        r#"// Hello World in Rust
fn main() {
    println!("Hello, World!");
}"#,
    ),
];

const FETCH_DATA: Snippets = &[
    (
        CodeLanguage::JavaScript,
        r#"// Fetch data from an API in JavaScript
async function fetchData(url) {
  try {
    const response = await fetch(url);
    const data = await response.json();
    return data;
  } catch (error) {
    console.error("Error fetching data:", error);
    throw error;
  }
}

// Usage
fetchData('https://api.example.com/data')
  .then(data => console.log(data))
  .catch(error => console.error(error));"#,
    ),
    (
        CodeLanguage::Python,
        r#"# Fetch data from an API in Python
import requests

def fetch_data(url):
    try:
        response = requests.get(url)
        response.raise_for_status()  # Raise an exception for HTTP errors
        return response.json()
    except requests.exceptions.RequestException as e:
        print(f"Error fetching data: {e}")
        raise

# Usage
try:
    data = fetch_data('https://api.example.com/data')
    print(data)
except Exception as e:
    print(f"An error occurred: {e}")"#,
    ),
    (
        CodeLanguage::Java,
        r#"// Fetch data from an API in Java
import java.net.URI;
import java.net.http.HttpClient;
import java.net.http.HttpRequest;
import java.net.http.HttpResponse;

public class DataFetcher {
    public static String fetchData(String url) throws Exception {
        HttpClient client = HttpClient.newHttpClient();
        HttpRequest request = HttpRequest.newBuilder()
                .uri(URI.create(url))
                .build();

        HttpResponse<String> response = client.send(request,
                HttpResponse.BodyHandlers.ofString());

        return response.body();
    }

    public static void main(String[] args) {
        try {
            String data = fetchData("https://api.example.com/data");
            System.out.println(data);
        } catch (Exception e) {
            System.err.println("Error fetching data: " + e.getMessage());
        }
    }
}"#,
    ),
];

const FILE_OPERATIONS: Snippets = &[
    (
        CodeLanguage::JavaScript,
        r#"// File operations in JavaScript (Node.js)
const fs = require('fs').promises;

async function readFile(filePath) {
  try {
    const data = await fs.readFile(filePath, 'utf8');
    return data;
  } catch (error) {
    console.error('Error reading file:', error);
    throw error;
  }
}

async function writeFile(filePath, content) {
  try {
    await fs.writeFile(filePath, content, 'utf8');
    console.log('File written successfully');
  } catch (error) {
    console.error('Error writing file:', error);
    throw error;
  }
}

// Usage
async function main() {
  try {
    const content = await readFile('input.txt');
    console.log('File content:', content);

    await writeFile('output.txt', 'New content');
  } catch (error) {
    console.error('Operation failed:', error);
  }
}

main();"#,
    ),
    (
        CodeLanguage::Python,
        r#"# File operations in Python
def read_file(file_path):
    try:
        with open(file_path, 'r') as file:
            return file.read()
    except Exception as e:
        print(f"Error reading file: {e}")
        raise

def write_file(file_path, content):
    try:
        with open(file_path, 'w') as file:
            file.write(content)
        print("File written successfully")
    except Exception as e:
        print(f"Error writing file: {e}")
        raise

# Usage
try:
    content = read_file('input.txt')
    print(f"File content: {content}")

    write_file('output.txt', 'New content')
except Exception as e:
    print(f"Operation failed: {e}")"#,
    ),
];

static RULES: [ResolutionRule<Snippets>; 3] = [
    ResolutionRule {
        name: "hello-world",
        predicate: Predicate::AnyOf(&["hello", "greeting"]),
        payload: HELLO_WORLD,
    },
    ResolutionRule {
        name: "fetch-data",
        predicate: Predicate::AnyOf(&["api", "fetch", "http"]),
        payload: FETCH_DATA,
    },
    ResolutionRule {
        name: "file-operations",
        predicate: Predicate::AnyOf(&["file", "read", "write"]),
        payload: FILE_OPERATIONS,
    },
];

static FALLBACK: ResolutionRule<Snippets> = ResolutionRule {
    name: "hello-world",
    predicate: Predicate::AnyOf(&[]),
    payload: HELLO_WORLD,
};

/// The code generation rule table.
pub static CODE_RULES: RuleTable<Snippets> = RuleTable::new(&RULES, &FALLBACK);

/// Picks the bucket for the prompt and the snippet for the language.
#[must_use]
pub fn generate(request: &CodeRequest) -> CodeSnippet {
    let rule = CODE_RULES.resolve(&request.prompt);
    let code = rule
        .payload
        .iter()
        .find(|(language, _)| *language == request.language)
        .map_or(NO_CODE_AVAILABLE, |(_, code)| *code);

    debug!(
        bucket = rule.name,
        language = request.language.as_str(),
        "Code bucket resolved"
    );

    CodeSnippet {
        language: request.language,
        bucket: rule.name.to_string(),
        code: code.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snippet(prompt: &str, language: CodeLanguage) -> CodeSnippet {
        generate(&CodeRequest::new(prompt, language))
    }

    #[test]
    fn test_hello_bucket_every_language() {
        for language in [
            CodeLanguage::JavaScript,
            CodeLanguage::Python,
            CodeLanguage::Java,
            CodeLanguage::Cpp,
            CodeLanguage::Rust,
        ] {
            let s = snippet("Write a greeting", language);
            assert_eq!(s.bucket, "hello-world");
            assert!(s.code.contains("Hello, World!"), "{language}");
        }
    }

    #[test]
    fn test_fetch_bucket() {
        let s = snippet("Call an HTTP API", CodeLanguage::Python);
        assert_eq!(s.bucket, "fetch-data");
        assert!(s.code.starts_with("# Fetch data from an API in Python"));
    }

    #[test]
    fn test_file_bucket() {
        let s = snippet("read a config", CodeLanguage::JavaScript);
        assert_eq!(s.bucket, "file-operations");
        assert!(s.code.contains("fs.readFile"));
    }

    #[test]
    fn test_hello_takes_precedence() {
        assert_eq!(snippet("hello from a file", CodeLanguage::Python).bucket, "hello-world");
    }

    #[test]
    fn test_default_bucket() {
        let s = snippet("sort a list", CodeLanguage::Rust);
        assert_eq!(s.bucket, "hello-world");
        assert!(s.code.contains("println!"));
    }

    #[test]
    fn test_missing_language_snippet() {
        assert_eq!(snippet("fetch users", CodeLanguage::Rust).code, NO_CODE_AVAILABLE);
        assert_eq!(snippet("write a file", CodeLanguage::Java).code, NO_CODE_AVAILABLE);
    }

    #[test]
    fn test_request_defaults() {
        let request: CodeRequest = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(request.language, CodeLanguage::JavaScript);
    }
}
