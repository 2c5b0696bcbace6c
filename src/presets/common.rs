//! Entries shared by every NeonMint preset.

use serde_json::{json, Value};

use crate::models::Manifest;
use crate::scaffold::ScaffoldError;

/// Favicon and web manifest placeholders under `public/`.
const PUBLIC_PLACEHOLDERS: &[&str] = &[
    "android-chrome-192x192.png",
    "android-chrome-512x512.png",
    "apple-touch-icon.png",
    "favicon-16x16.png",
    "favicon-32x32.png",
    "favicon.ico",
    "site.webmanifest",
];

const SOURCE_DIRECTORIES: &[&str] = &[
    "src/components/blog",
    "src/components/layout",
    "src/components/portfolio",
    "src/components/ui",
    "src/icons",
    "src/layouts",
    "src/pages/blog/posts",
    "src/pages/blog/tags",
    "src/pages/blog/techs",
    "src/pages/portfolio/projects",
    "src/scripts",
    "src/styles",
    "src/utils",
];

/// Layout files; every preset writes the same payload to each of them.
pub const LAYOUT_FILES: &[&str] = &[
    "Layout.astro",
    "MarkdownAbout.astro",
    "MarkdownPostLayout.astro",
    "ProjectLayout.astro",
];

const EXAMPLE_POST: &str = r#"---
title: "Example Blog Post"
description: "This is a placeholder blog post using content collections."
pubDate: 2026-01-01
tags: ["example", "astro"]
---

Welcome to my first blog post created with Astro content collections!
"#;

const SECOND_POST: &str = r#"---
title: "Second Example Post"
description: "Another example demonstrating dynamic routing."
pubDate: 2026-01-15
tags: ["astro", "typescript"]
---

This is the second example post.
"#;

const EXAMPLE_PROJECT: &str = r#"---
title: "Insight Hunter"
description: "A showcase project using content collections."
pubDate: 2026-01-01
techs: ["Astro", "TypeScript"]
featured: true
image: "/images/projects/insight-hunter-hero-image.png"
link: "https://github.com/Insight-Hunter/insighthunter-home.git "
---

Description of the example project.
"#;

const ROBOTS_ROUTE: &str = r#"// robots.txt generation
export const GET = () => new Response("User-agent: *\nAllow: /", { headers: { "Content-Type": "text/plain" } });"#;

const RSS_ROUTE: &str = "// RSS feed generation - implement using getCollection if desired";

const MENU_SCRIPT: &str = "// Menu-related JavaScript\n";

const LANGUAGES_UTIL: &str =
    "// Technology/language configuration\nexport const languages: string[] = [];\n";

const CONTENT_CONFIG: &str = r#"import { z, defineCollection } from 'astro:content';

const blogCollection = defineCollection({
  type: 'content',
  schema: z.object({
    title: z.string(),
    description: z.string(),
    pubDate: z.coerce.date(),
    updatedDate: z.coerce.date().optional(),
    tags: z.array(z.string()).optional(),
    draft: z.boolean().optional().default(false),
  }),
});

const projectsCollection = defineCollection({
  type: 'content',
  schema: z.object({
    title: z.string(),
    description: z.string(),
    pubDate: z.coerce.date(),
    techs: z.array(z.string()),
    featured: z.boolean().optional(),
    image: z.string().optional(),
    link: z.string().url().optional(),
  }),
});

export const collections = {
  blog: blogCollection,
  projects: projectsCollection,
};
"#;

pub const GITIGNORE: &str = "node_modules/
dist/
.env
.DS_Store
.astro/
";

/// `public/` with image folders and icon placeholders.
pub fn public_assets(manifest: Manifest) -> Manifest {
    let manifest = manifest
        .dir("public")
        .dir("public/images/posts")
        .dir("public/images/projects");

    PUBLIC_PLACEHOLDERS
        .iter()
        .fold(manifest, |m, name| m.placeholder(format!("public/{}", name)))
}

/// Directory skeleton under `src/`, including the content collection folders.
pub fn source_tree(manifest: Manifest) -> Manifest {
    SOURCE_DIRECTORIES
        .iter()
        .fold(manifest, |m, dir| m.dir(*dir))
        .dir("src/content/blog")
        .dir("src/content/projects")
}

/// Example blog posts and project for the content collections.
pub fn example_content(manifest: Manifest) -> Manifest {
    manifest
        .file("src/content/blog/example-post.md", EXAMPLE_POST)
        .file("src/content/blog/second-post.md", SECOND_POST)
        .file("src/content/projects/example-project.md", EXAMPLE_PROJECT)
}

/// The same layout payload written to each of [`LAYOUT_FILES`].
pub fn layouts(manifest: Manifest, template: &str) -> Manifest {
    LAYOUT_FILES.iter().fold(manifest, |m, name| {
        m.file(format!("src/layouts/{}", name), template)
    })
}

/// Route stubs, client script and utility module.
pub fn routes_and_scripts(manifest: Manifest) -> Manifest {
    manifest
        .file("src/pages/robots.txt.ts", ROBOTS_ROUTE)
        .file("src/pages/rss.xml.js", RSS_ROUTE)
        .file("src/scripts/menu.js", MENU_SCRIPT)
        .file("src/utils/languages.ts", LANGUAGES_UTIL)
}

/// Content collection schema definitions.
pub fn content_config(manifest: Manifest) -> Manifest {
    manifest.file("src/content/config.ts", CONTENT_CONFIG)
}

/// Pretty JSON with two-space indent and no trailing newline.
pub fn to_json(value: &Value) -> Result<String, ScaffoldError> {
    serde_json::to_string_pretty(value).map_err(ScaffoldError::Serialize)
}

pub fn package_json(dependencies: Value) -> Result<String, ScaffoldError> {
    to_json(&json!({
        "name": "neonmint",
        "version": "0.1.0",
        "private": true,
        "type": "module",
        "scripts": {
            "dev": "astro dev",
            "start": "astro dev",
            "build": "astro build",
            "preview": "astro preview",
        },
        "dependencies": dependencies,
    }))
}

pub fn tsconfig_json() -> Result<String, ScaffoldError> {
    to_json(&json!({
        "extends": "astro/tsconfigs/strict",
        "include": ["src"],
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tsconfig_layout() {
        assert_eq!(
            tsconfig_json().unwrap(),
            "{\n  \"extends\": \"astro/tsconfigs/strict\",\n  \"include\": [\n    \"src\"\n  ]\n}"
        );
    }

    #[test]
    fn test_package_json_keeps_key_order() {
        let json = package_json(json!({ "astro": "^5.0.0" })).unwrap();
        let name = json.find("\"name\"").unwrap();
        let scripts = json.find("\"scripts\"").unwrap();
        let deps = json.find("\"dependencies\"").unwrap();
        assert!(name < scripts && scripts < deps);
        assert!(json.contains("\"type\": \"module\""));
    }

    #[test]
    fn test_robots_route_keeps_escaped_newline() {
        assert!(ROBOTS_ROUTE.contains(r"User-agent: *\nAllow: /"));
        assert!(!ROBOTS_ROUTE.ends_with('\n'));
    }

    #[test]
    fn test_public_assets_order() {
        let manifest = public_assets(Manifest::new());
        assert_eq!(manifest.len(), 3 + PUBLIC_PLACEHOLDERS.len());
        assert_eq!(manifest.entries()[0].path.to_str(), Some("public"));
        assert_eq!(
            manifest.entries()[3].path.to_str(),
            Some("public/android-chrome-192x192.png")
        );
    }
}
