//! Skill classification: free-text label -> category + icon reference.
//!
//! Exact alias matches win. Labels without an alias fall through an ordered
//! list of marker rules (first match wins) and never get an icon.

use crate::core::icons::IconRef;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Frontend,
    Backend,
    Testing,
    Design,
    Tools,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Frontend,
        Category::Backend,
        Category::Testing,
        Category::Design,
        Category::Tools,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Frontend => "frontend",
            Category::Backend => "backend",
            Category::Testing => "testing",
            Category::Design => "design",
            Category::Tools => "tools",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SkillClassification {
    pub category: Category,
    pub icon: IconRef,
}

struct Alias {
    keys: &'static [&'static str],
    icon: Option<&'static str>,
    category: Category,
}

use Category::{Backend, Design, Frontend, Testing, Tools};

// Keys are in canonical form: see `canonical_key`.
const ALIASES: &[Alias] = &[
    // Frontend frameworks and libraries
    Alias { keys: &["react", "react native", "reactnative"], icon: Some("react"), category: Frontend },
    Alias { keys: &["vue"], icon: Some("vuedotjs"), category: Frontend },
    Alias { keys: &["angular"], icon: Some("angular"), category: Frontend },
    Alias { keys: &["svelte"], icon: Some("svelte"), category: Frontend },
    Alias { keys: &["next"], icon: Some("nextdotjs"), category: Frontend },
    Alias { keys: &["nuxt"], icon: Some("nuxtdotjs"), category: Frontend },
    Alias { keys: &["gatsby"], icon: Some("gatsby"), category: Frontend },
    Alias { keys: &["ember"], icon: Some("emberdotjs"), category: Frontend },
    // Languages
    Alias { keys: &["javascript", "js"], icon: Some("javascript"), category: Frontend },
    Alias { keys: &["typescript", "ts"], icon: Some("typescript"), category: Frontend },
    Alias { keys: &["python"], icon: Some("python"), category: Backend },
    Alias { keys: &["java"], icon: Some("oracle"), category: Backend },
    Alias { keys: &["c#", "csharp"], icon: Some("csharp"), category: Backend },
    Alias { keys: &["c++", "cpp"], icon: Some("cplusplus"), category: Backend },
    Alias { keys: &["c"], icon: Some("c"), category: Backend },
    Alias { keys: &["php"], icon: Some("php"), category: Backend },
    Alias { keys: &["ruby"], icon: Some("ruby"), category: Backend },
    Alias { keys: &["go", "golang"], icon: Some("go"), category: Backend },
    Alias { keys: &["rust"], icon: Some("rust"), category: Backend },
    Alias { keys: &["swift"], icon: Some("swift"), category: Frontend },
    Alias { keys: &["kotlin"], icon: Some("kotlin"), category: Backend },
    Alias { keys: &["scala"], icon: Some("scala"), category: Backend },
    Alias { keys: &["r"], icon: Some("r"), category: Backend },
    // Styling and markup
    Alias { keys: &["html", "html5"], icon: Some("html5"), category: Frontend },
    Alias { keys: &["css", "css3"], icon: Some("css3"), category: Frontend },
    Alias { keys: &["sass", "scss"], icon: Some("sass"), category: Frontend },
    Alias { keys: &["tailwind", "tailwind css", "tailwindcss"], icon: Some("tailwindcss"), category: Frontend },
    Alias { keys: &["bootstrap"], icon: Some("bootstrap"), category: Frontend },
    Alias { keys: &["materialui", "material-ui", "material ui", "mui"], icon: Some("mui"), category: Frontend },
    // Backend frameworks
    Alias { keys: &["node"], icon: Some("nodedotjs"), category: Backend },
    Alias { keys: &["express"], icon: Some("express"), category: Backend },
    Alias { keys: &["nest"], icon: Some("nestjs"), category: Backend },
    Alias { keys: &["django"], icon: Some("django"), category: Backend },
    Alias { keys: &["flask"], icon: Some("flask"), category: Backend },
    Alias { keys: &["fastapi"], icon: Some("fastapi"), category: Backend },
    Alias { keys: &["spring", "spring boot", "springboot"], icon: Some("spring"), category: Backend },
    Alias { keys: &["laravel"], icon: Some("laravel"), category: Backend },
    Alias { keys: &["rails", "ruby on rails"], icon: Some("rubyonrails"), category: Backend },
    Alias { keys: &[".net", "dotnet", "asp.net"], icon: Some("dotnet"), category: Backend },
    // Databases
    Alias { keys: &["mysql"], icon: Some("mysql"), category: Backend },
    Alias { keys: &["postgresql", "postgres"], icon: Some("postgresql"), category: Backend },
    Alias { keys: &["mongodb", "mongo"], icon: Some("mongodb"), category: Backend },
    Alias { keys: &["redis"], icon: Some("redis"), category: Backend },
    Alias { keys: &["sqlite"], icon: Some("sqlite"), category: Backend },
    Alias { keys: &["mariadb"], icon: Some("mariadb"), category: Backend },
    Alias { keys: &["firebase"], icon: Some("firebase"), category: Backend },
    Alias { keys: &["supabase"], icon: Some("supabase"), category: Backend },
    Alias { keys: &["dynamodb", "dynamo"], icon: Some("amazondynamodb"), category: Backend },
    Alias { keys: &["cassandra"], icon: Some("apachecassandra"), category: Backend },
    Alias { keys: &["elasticsearch"], icon: Some("elasticsearch"), category: Backend },
    // DevOps and cloud
    Alias { keys: &["docker"], icon: Some("docker"), category: Tools },
    Alias { keys: &["kubernetes", "k8s"], icon: Some("kubernetes"), category: Tools },
    Alias { keys: &["aws", "amazon web services"], icon: Some("amazonaws"), category: Tools },
    Alias { keys: &["azure", "microsoft azure"], icon: Some("microsoftazure"), category: Tools },
    Alias { keys: &["gcp", "google cloud", "google cloud platform"], icon: Some("googlecloud"), category: Tools },
    Alias { keys: &["heroku"], icon: Some("heroku"), category: Tools },
    Alias { keys: &["vercel"], icon: Some("vercel"), category: Tools },
    Alias { keys: &["netlify"], icon: Some("netlify"), category: Tools },
    Alias { keys: &["digitalocean"], icon: Some("digitalocean"), category: Tools },
    // Version control and CI/CD
    Alias { keys: &["git"], icon: Some("git"), category: Tools },
    Alias { keys: &["github"], icon: Some("github"), category: Tools },
    Alias { keys: &["gitlab", "gitlab ci", "gitlabci"], icon: Some("gitlab"), category: Tools },
    Alias { keys: &["bitbucket"], icon: Some("bitbucket"), category: Tools },
    Alias { keys: &["jenkins"], icon: Some("jenkins"), category: Tools },
    Alias { keys: &["github actions", "githubactions"], icon: Some("githubactions"), category: Tools },
    Alias { keys: &["circleci", "circle ci"], icon: Some("circleci"), category: Tools },
    Alias { keys: &["travis", "travis ci", "travisci"], icon: Some("travisci"), category: Tools },
    // Testing
    Alias { keys: &["jest"], icon: Some("jest"), category: Testing },
    Alias { keys: &["mocha"], icon: Some("mocha"), category: Testing },
    Alias { keys: &["cypress"], icon: Some("cypress"), category: Testing },
    Alias { keys: &["selenium"], icon: Some("selenium"), category: Testing },
    Alias { keys: &["playwright"], icon: Some("playwright"), category: Testing },
    Alias { keys: &["vitest"], icon: Some("vitest"), category: Testing },
    // Mobile
    Alias { keys: &["flutter"], icon: Some("flutter"), category: Frontend },
    Alias { keys: &["android"], icon: Some("android"), category: Frontend },
    Alias { keys: &["ios"], icon: Some("ios"), category: Frontend },
    // APIs
    Alias { keys: &["graphql"], icon: Some("graphql"), category: Backend },
    Alias { keys: &["rest", "rest api", "rest apis", "api", "apis"], icon: None, category: Backend },
    // Build tools
    Alias { keys: &["webpack"], icon: Some("webpack"), category: Tools },
    Alias { keys: &["vite"], icon: Some("vite"), category: Tools },
    Alias { keys: &["rollup"], icon: Some("rollupdotjs"), category: Tools },
    Alias { keys: &["parcel"], icon: Some("parcel"), category: Tools },
    Alias { keys: &["gulp"], icon: Some("gulp"), category: Tools },
    Alias { keys: &["grunt"], icon: Some("grunt"), category: Tools },
    // Design
    Alias { keys: &["figma"], icon: Some("figma"), category: Design },
    Alias { keys: &["sketch"], icon: Some("sketch"), category: Design },
    Alias { keys: &["adobe xd", "xd"], icon: Some("adobexd"), category: Design },
    Alias { keys: &["photoshop", "adobe photoshop"], icon: Some("adobephotoshop"), category: Design },
    Alias { keys: &["illustrator", "adobe illustrator"], icon: Some("adobeillustrator"), category: Design },
    // Other tools
    Alias { keys: &["postman"], icon: Some("postman"), category: Tools },
    Alias { keys: &["insomnia"], icon: Some("insomnia"), category: Tools },
    Alias { keys: &["jira"], icon: Some("jira"), category: Tools },
    Alias { keys: &["confluence"], icon: Some("confluence"), category: Tools },
    Alias { keys: &["slack"], icon: Some("slack"), category: Tools },
    Alias { keys: &["discord"], icon: Some("discord"), category: Tools },
    Alias { keys: &["notion"], icon: Some("notion"), category: Tools },
    Alias { keys: &["trello"], icon: Some("trello"), category: Tools },
];

enum Marker {
    /// Matches anywhere in the label.
    Sub(&'static str),
    /// Matches a whole word only ("ui" must not match "build").
    Word(&'static str),
}

use Marker::{Sub, Word};

// Evaluated top to bottom; the first rule with a matching marker wins.
const RULES: &[(Category, &[Marker])] = &[
    (
        Frontend,
        &[
            Sub("react"), Sub("vue"), Sub("angular"), Sub("html"), Sub("css"),
            Sub("tailwind"), Sub("sass"), Sub("next"), Sub("svelte"), Sub("typescript"),
            Sub("frontend"), Sub("front-end"),
        ],
    ),
    (
        Backend,
        &[
            Sub("node"), Sub("express"), Sub("python"), Sub("django"), Sub("flask"),
            Sub("java"), Sub("spring"), Sub("php"), Sub("laravel"), Sub("ruby"),
            Sub("rails"), Word("go"), Sub("rust"), Sub("c#"), Sub(".net"), Sub("sql"),
            Sub("postgres"), Sub("mongo"), Sub("redis"), Sub("database"), Sub("backend"),
            Sub("back-end"), Sub("api"),
        ],
    ),
    (
        Testing,
        &[
            Sub("jest"), Sub("mocha"), Sub("test"), Sub("cypress"), Sub("selenium"),
            Sub("junit"), Sub("qa"),
        ],
    ),
    (
        Design,
        &[
            Sub("figma"), Sub("sketch"), Sub("adobe"), Sub("design"), Word("ux"),
            Word("ui"),
        ],
    ),
    (
        Tools,
        &[
            Sub("docker"), Sub("kubernetes"), Sub("aws"), Sub("azure"), Sub("gcp"),
            Sub("git"), Sub("ci/cd"), Sub("jenkins"), Sub("cloud"), Sub("devops"),
            Sub("terraform"), Sub("linux"),
        ],
    ),
];

/// Catch-all for labels no rule recognizes; unrecognized names are most
/// often programming languages.
const DEFAULT_CATEGORY: Category = Category::Frontend;

/// Lowercase, trim, collapse internal whitespace and fold the `js` suffix
/// family ("Node.js", "nodejs", "node" all become "node").
pub fn canonical_key(label: &str) -> String {
    let key = label
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();

    for suffix in [".js", "js"] {
        if let Some(stem) = key.strip_suffix(suffix) {
            let stem = stem.trim_end();
            if stem.len() >= 2 && !stem.ends_with('.') {
                return stem.to_string();
            }
        }
    }
    key
}

pub fn classify(label: &str) -> SkillClassification {
    let key = canonical_key(label);

    if let Some(alias) = ALIASES.iter().find(|a| a.keys.contains(&key.as_str())) {
        return SkillClassification {
            category: alias.category,
            icon: alias.icon.map(IconRef::from_slug).unwrap_or(IconRef::NONE),
        };
    }

    SkillClassification {
        category: infer_category(&key),
        icon: IconRef::NONE,
    }
}

fn infer_category(key: &str) -> Category {
    if key.is_empty() {
        return DEFAULT_CATEGORY;
    }
    let words: Vec<&str> = key
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect();

    RULES
        .iter()
        .find(|(_, markers)| {
            markers.iter().any(|marker| match marker {
                Sub(needle) => key.contains(needle),
                Word(word) => words.contains(word),
            })
        })
        .map(|(category, _)| *category)
        .unwrap_or(DEFAULT_CATEGORY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::icons::REGISTRY;

    #[test]
    fn test_alias_variants_are_equivalent() {
        assert_eq!(classify("React"), classify("reactjs"));
        assert_eq!(classify("Node.js"), classify("nodejs"));
        assert_eq!(classify("node"), classify("  NODE.JS "));
        assert_eq!(classify("Vue.js").icon.as_str(), "vuedotjs");
        assert_eq!(classify("Tailwind  CSS").icon.as_str(), "tailwindcss");
    }

    #[test]
    fn test_alias_beats_substring_rules() {
        // "javascript" contains "java" but the alias table decides first.
        assert_eq!(classify("JavaScript").category, Category::Frontend);
        assert_eq!(classify("Java").category, Category::Backend);
        // "Express.js" and "Next.js" would share markers without aliases.
        assert_eq!(classify("Express.js").category, Category::Backend);
        assert_eq!(classify("Jest").category, Category::Testing);
        assert_eq!(classify("Docker").category, Category::Tools);
    }

    #[test]
    fn test_rules_in_priority_order() {
        let c = classify("React Testing Library");
        assert_eq!(c.category, Category::Frontend);
        assert!(c.icon.is_none());

        assert_eq!(classify("Unit testing").category, Category::Testing);
        assert_eq!(classify("UI Design").category, Category::Design);
        assert_eq!(classify("Build pipelines").category, Category::Frontend);
        assert_eq!(classify("Cloud Architecture").category, Category::Tools);
        assert_eq!(classify("PostgreSQL 15").category, Category::Backend);
        assert_eq!(classify("Go routines").category, Category::Backend);
        assert_eq!(classify("Google Analytics").category, Category::Frontend);
    }

    #[test]
    fn test_unmatched_label_has_no_icon() {
        let c = classify("Haskell");
        assert_eq!(c.category, Category::Frontend);
        assert!(c.icon.is_none());

        let rest = classify("REST APIs");
        assert_eq!(rest.category, Category::Backend);
        assert!(rest.icon.is_none());
    }

    #[test]
    fn test_total_on_odd_input() {
        let long = "x".repeat(500);
        for label in ["", "   ", "js", ".js", "C++", "c#", "🚀", "a\tb\nc", long.as_str()] {
            let c = classify(label);
            assert!(Category::ALL.contains(&c.category));
            assert!(c.icon.is_none() || REGISTRY.iter().any(|e| e.slug == c.icon.as_str()));
        }
        assert_eq!(classify("").category, Category::Frontend);
        assert!(classify("").icon.is_none());
    }

    #[test]
    fn test_every_alias_icon_is_registered() {
        for alias in ALIASES {
            if let Some(slug) = alias.icon {
                assert!(!IconRef::from_slug(slug).is_none(), "unregistered icon {}", slug);
            }
        }
    }

    #[test]
    fn test_canonical_key() {
        assert_eq!(canonical_key(" Next.JS "), "next");
        assert_eq!(canonical_key("js"), "js");
        assert_eq!(canonical_key("Ruby   on Rails"), "ruby on rails");
    }
}
