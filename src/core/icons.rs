//! Abstract icon identifiers.
//!
//! The classifier and the derived-fact helpers only hand out identifiers from
//! this module. Turning an identifier into markup is the compiler's job
//! (see `core::glyphs`).

use serde::Serialize;

/// Entry in the curated technology-icon registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TechIcon {
    pub slug: &'static str,
    pub title: &'static str,
    /// Brand color without the leading `#`.
    pub hex: &'static str,
}

const fn icon(slug: &'static str, title: &'static str, hex: &'static str) -> TechIcon {
    TechIcon { slug, title, hex }
}

pub const REGISTRY: &[TechIcon] = &[
    icon("react", "React", "61DAFB"),
    icon("vuedotjs", "Vue.js", "4FC08D"),
    icon("angular", "Angular", "DD0031"),
    icon("svelte", "Svelte", "FF3E00"),
    icon("nextdotjs", "Next.js", "000000"),
    icon("nuxtdotjs", "Nuxt", "00DC82"),
    icon("gatsby", "Gatsby", "663399"),
    icon("emberdotjs", "Ember.js", "E04E39"),
    icon("javascript", "JavaScript", "F7DF1E"),
    icon("typescript", "TypeScript", "3178C6"),
    icon("python", "Python", "3776AB"),
    icon("oracle", "Java", "F80000"),
    icon("csharp", "C#", "512BD4"),
    icon("cplusplus", "C++", "00599C"),
    icon("c", "C", "A8B9CC"),
    icon("php", "PHP", "777BB4"),
    icon("ruby", "Ruby", "CC342D"),
    icon("go", "Go", "00ADD8"),
    icon("rust", "Rust", "000000"),
    icon("swift", "Swift", "F05138"),
    icon("kotlin", "Kotlin", "7F52FF"),
    icon("scala", "Scala", "DC322F"),
    icon("r", "R", "276DC3"),
    icon("html5", "HTML5", "E34F26"),
    icon("css3", "CSS3", "1572B6"),
    icon("sass", "Sass", "CC6699"),
    icon("tailwindcss", "Tailwind CSS", "06B6D4"),
    icon("bootstrap", "Bootstrap", "7952B3"),
    icon("mui", "MUI", "007FFF"),
    icon("nodedotjs", "Node.js", "5FA04E"),
    icon("express", "Express", "000000"),
    icon("nestjs", "NestJS", "E0234E"),
    icon("django", "Django", "092E20"),
    icon("flask", "Flask", "000000"),
    icon("fastapi", "FastAPI", "009688"),
    icon("spring", "Spring", "6DB33F"),
    icon("laravel", "Laravel", "FF2D20"),
    icon("rubyonrails", "Ruby on Rails", "D30001"),
    icon("dotnet", ".NET", "512BD4"),
    icon("mysql", "MySQL", "4479A1"),
    icon("postgresql", "PostgreSQL", "4169E1"),
    icon("mongodb", "MongoDB", "47A248"),
    icon("redis", "Redis", "FF4438"),
    icon("sqlite", "SQLite", "003B57"),
    icon("mariadb", "MariaDB", "003545"),
    icon("firebase", "Firebase", "DD2C00"),
    icon("supabase", "Supabase", "3FCF8E"),
    icon("amazondynamodb", "Amazon DynamoDB", "4053D6"),
    icon("apachecassandra", "Apache Cassandra", "1287B1"),
    icon("elasticsearch", "Elasticsearch", "005571"),
    icon("docker", "Docker", "2496ED"),
    icon("kubernetes", "Kubernetes", "326CE5"),
    icon("amazonaws", "Amazon Web Services", "FF9900"),
    icon("microsoftazure", "Microsoft Azure", "0078D4"),
    icon("googlecloud", "Google Cloud", "4285F4"),
    icon("heroku", "Heroku", "430098"),
    icon("vercel", "Vercel", "000000"),
    icon("netlify", "Netlify", "00C7B7"),
    icon("digitalocean", "DigitalOcean", "0080FF"),
    icon("git", "Git", "F05032"),
    icon("github", "GitHub", "181717"),
    icon("gitlab", "GitLab", "FC6D26"),
    icon("bitbucket", "Bitbucket", "0052CC"),
    icon("jenkins", "Jenkins", "D24939"),
    icon("githubactions", "GitHub Actions", "2088FF"),
    icon("circleci", "CircleCI", "343434"),
    icon("travisci", "Travis CI", "3EAAAF"),
    icon("jest", "Jest", "C21325"),
    icon("mocha", "Mocha", "8D6748"),
    icon("cypress", "Cypress", "69D3A7"),
    icon("selenium", "Selenium", "43B02A"),
    icon("playwright", "Playwright", "2EAD33"),
    icon("vitest", "Vitest", "6E9F18"),
    icon("flutter", "Flutter", "02569B"),
    icon("android", "Android", "34A853"),
    icon("ios", "iOS", "000000"),
    icon("graphql", "GraphQL", "E10098"),
    icon("webpack", "Webpack", "8DD6F9"),
    icon("vite", "Vite", "646CFF"),
    icon("rollupdotjs", "Rollup", "EC4A3F"),
    icon("parcel", "Parcel", "E7A427"),
    icon("gulp", "Gulp", "CF4647"),
    icon("grunt", "Grunt", "FAA918"),
    icon("figma", "Figma", "F24E1E"),
    icon("sketch", "Sketch", "F7B500"),
    icon("adobexd", "Adobe XD", "FF61F6"),
    icon("adobephotoshop", "Adobe Photoshop", "31A8FF"),
    icon("adobeillustrator", "Adobe Illustrator", "FF9A00"),
    icon("postman", "Postman", "FF6C37"),
    icon("insomnia", "Insomnia", "4000BF"),
    icon("jira", "Jira", "0052CC"),
    icon("confluence", "Confluence", "172B4D"),
    icon("slack", "Slack", "4A154B"),
    icon("discord", "Discord", "5865F2"),
    icon("notion", "Notion", "000000"),
    icon("trello", "Trello", "0052CC"),
];

/// Identifier into [`REGISTRY`], or `"none"` for the fallback glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct IconRef(&'static str);

impl IconRef {
    pub const NONE: IconRef = IconRef("none");

    /// Only slugs present in the registry produce a real reference.
    pub fn from_slug(slug: &str) -> IconRef {
        REGISTRY
            .iter()
            .find(|entry| entry.slug == slug)
            .map(|entry| IconRef(entry.slug))
            .unwrap_or(IconRef::NONE)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }

    pub fn is_none(&self) -> bool {
        self.0 == IconRef::NONE.0
    }

    pub fn lookup(&self) -> Option<&'static TechIcon> {
        REGISTRY.iter().find(|entry| entry.slug == self.0)
    }
}

impl std::fmt::Display for IconRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

/// Generic interface glyphs (industry, achievement, contact and nav icons).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Glyph {
    Laptop,
    TrendingUp,
    Factory,
    Building,
    Users,
    Zap,
    Clock,
    CheckCircle,
    Terminal,
    Mail,
    Phone,
    MapPin,
    Globe,
    Github,
    Linkedin,
    ExternalLink,
    Calendar,
    Download,
    Menu,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_registry_slugs_are_unique() {
        let slugs: HashSet<&str> = REGISTRY.iter().map(|e| e.slug).collect();
        assert_eq!(slugs.len(), REGISTRY.len());
        assert!(!slugs.contains("none"));
    }

    #[test]
    fn test_from_slug_rejects_unknown() {
        assert_eq!(IconRef::from_slug("react").as_str(), "react");
        assert!(IconRef::from_slug("cobol").is_none());
        assert_eq!(IconRef::from_slug("docker").lookup().unwrap().hex, "2496ED");
    }
}
