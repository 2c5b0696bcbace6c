//! NeonMint before the Tailwind migration: plain CSS and unstyled markup.
//!
//! Reconstructed from the Tailwind tree by swapping out its styling; it is
//! not the output of an earlier script.

use serde_json::json;

use super::common;
use crate::models::Manifest;
use crate::scaffold::ScaffoldError;

const LAYOUT: &str = r#"---
import '../styles/global.css';
const { title = 'NeonMint' } = Astro.props;
---

<html lang="en">
  <head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <title>{title}</title>
  </head>
  <body>
    <slot />
  </body>
</html>
"#;

const ABOUT_PAGE: &str = r#"# About Me

Your content here.
"#;

const INDEX_PAGE: &str = r#"---
import Layout from '../layouts/Layout.astro';
---

<Layout title="Home">
  <main>
    <h1>Welcome to NeonMint</h1>
    <p>A portfolio and blog built with Astro.</p>
  </main>
</Layout>
"#;

const BLOG_INDEX: &str = r#"---
import { getCollection } from 'astro:content';
import Layout from '../../layouts/Layout.astro';

const posts = await getCollection('blog');
const sortedPosts = posts.sort((a, b) => b.data.pubDate.valueOf() - a.data.pubDate.valueOf());
---

<Layout title="Blog">
  <h1>Blog Posts</h1>
  <ul>
    {sortedPosts.map(post => (
      <li>
        <a href={`/blog/${post.slug}`}>{post.data.title}</a>
        <time>{post.data.pubDate.toLocaleDateString()}</time>
      </li>
    ))}
  </ul>
</Layout>
"#;

const BLOG_POST: &str = r#"---
import { getEntry } from 'astro:content';
import Layout from '../../layouts/MarkdownPostLayout.astro';

const { slug } = Astro.params;
const post = await getEntry('blog', slug);

if (!post) {
  return Astro.redirect('/404');
}

const { Content } = await post.render();
---

<Layout title={post.data.title}>
  <article>
    <h1>{post.data.title}</h1>
    <time>{post.data.pubDate.toLocaleDateString()}</time>
    <Content />
  </article>
</Layout>
"#;

const PORTFOLIO_INDEX: &str = r#"---
import { getCollection } from 'astro:content';
import Layout from '../../layouts/Layout.astro';

const projects = await getCollection('projects');
---

<Layout title="Portfolio">
  <h1>Projects</h1>
  <ul>
    {projects.map(project => (
      <li><a href={`/portfolio/${project.slug}`}>{project.data.title}</a></li>
    ))}
  </ul>
</Layout>
"#;

const PORTFOLIO_PROJECT: &str = r#"---
import { getEntry } from 'astro:content';
import Layout from '../../layouts/ProjectLayout.astro';

const { slug } = Astro.params;
const project = await getEntry('projects', slug);

if (!project) {
  return Astro.redirect('/404');
}

const { Content } = await project.render();
---

<Layout title={project.data.title}>
  <article>
    <h1>{project.data.title}</h1>
    <p>{project.data.description}</p>
    <p>Technologies: {project.data.techs.join(', ')}</p>
    <Content />
  </article>
</Layout>
"#;

const STYLESHEET: &str = r#":root {
  --color-background: #f7f9fc;
  --color-foreground: #1c2333;
  --color-accent: #7c5cff;
}

body {
  margin: 0;
  font-family: system-ui, sans-serif;
  background: var(--color-background);
  color: var(--color-foreground);
}

a {
  color: var(--color-accent);
}
"#;

const ASTRO_CONFIG: &str = r#"import { defineConfig } from 'astro/config';

export default defineConfig({
  site: 'https://example.com',
  // Example integrations (uncomment and install as needed)
  // integrations: [sitemap(), mdx()],
});
"#;

const README: &str = r#"# NeonMint

An Astro-based personal portfolio and blog with **content collections** and **dynamic routing**.

## Getting Started

```bash
npm install
npm run dev
```

Global styles live in `src/styles/global.css`.
"#;

pub fn manifest() -> Result<Manifest, ScaffoldError> {
    let manifest = common::public_assets(Manifest::new());
    let manifest = common::source_tree(manifest);
    let manifest = common::example_content(manifest);
    let manifest = common::layouts(manifest, LAYOUT);

    let manifest = manifest
        .file("src/pages/about-me.md", ABOUT_PAGE)
        .file("src/pages/index.astro", INDEX_PAGE)
        .file("src/pages/blog/index.astro", BLOG_INDEX)
        .file("src/pages/blog/[slug].astro", BLOG_POST)
        .file("src/pages/portfolio/index.astro", PORTFOLIO_INDEX)
        .file("src/pages/portfolio/[slug].astro", PORTFOLIO_PROJECT)
        .file("src/styles/global.css", STYLESHEET);

    let manifest = common::routes_and_scripts(manifest);
    let manifest = common::content_config(manifest);

    let package = common::package_json(json!({ "astro": "^5.0.0" }))?;

    Ok(manifest
        .file(".gitignore", common::GITIGNORE)
        .file("package.json", package)
        .file("astro.config.mjs", ASTRO_CONFIG)
        .file("README.md", README)
        .file("tsconfig.json", common::tsconfig_json()?))
}
