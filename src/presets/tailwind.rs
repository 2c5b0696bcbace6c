//! NeonMint with Tailwind CSS v4 through the official Vite plugin.

use serde_json::json;

use super::common;
use crate::models::Manifest;
use crate::scaffold::ScaffoldError;

const LAYOUT: &str = r#"---
import '../styles/tailwind.css';
const { title = 'NeonMint' } = Astro.props;
---

<html lang="en">
  <head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <title>{title}</title>
  </head>
  <body class="min-h-screen bg-background text-foreground">
    <slot />
  </body>
</html>
"#;

const ABOUT_PAGE: &str = r#"# About Me

Your content here.

<div class="mt-8 p-6 bg-card rounded-lg shadow-lg">
  <p class="text-muted-foreground">Customize this page with Tailwind utilities.</p>
</div>
"#;

const INDEX_PAGE: &str = r#"---
import Layout from '../layouts/BaseLayout.astro';
---

<Layout title="Home">
  <main class="container mx-auto px-4 py-16">
    <h1 class="text-4xl font-bold text-center mb-8">Welcome to NeonMint</h1>
    <p class="text-xl text-center text-muted-foreground">A modern portfolio and blog built with Astro and Tailwind CSS.</p>
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
  <main class="container mx-auto px-4 py-16">
    <h1 class="text-4xl font-bold mb-12 text-center">Blog Posts</h1>
    <ul class="grid gap-8 md:grid-cols-2 lg:grid-cols-3">
      {sortedPosts.map(post => (
        <li class="bg-card rounded-lg shadow hover:shadow-lg transition">
          <a href={`/blog/${post.slug}`} class="block p-6">
            <h2 class="text-2xl font-semibold mb-2">{post.data.title}</h2>
            <time class="text-sm text-muted-foreground">{post.data.pubDate.toLocaleDateString()}</time>
          </a>
        </li>
      ))}
    </ul>
  </main>
</Layout>
"#;

const BLOG_POST: &str = r#"---
import { getCollection, getEntry } from 'astro:content';
import Layout from '../../layouts/MarkdownPostLayout.astro';

const { slug } = Astro.params;
const post = await getEntry('blog', slug);

if (!post) {
  return Astro.redirect('/404');
}

const { Content } = await post.render();
---

<Layout title={post.data.title}>
  <article class="container mx-auto px-4 py-16 prose prose-lg max-w-3xl mx-auto">
    <header class="mb-12 text-center">
      <h1 class="text-5xl font-bold mb-4">{post.data.title}</h1>
      <time class="text-muted-foreground">{post.data.pubDate.toLocaleDateString()}</time>
      {post.data.tags && <p class="mt-4">Tags: {post.data.tags.join(', ')}</p>}
    </header>
    <Content />
  </article>
</Layout>
"#;

const PORTFOLIO_INDEX: &str = r#"---
import { getCollection } from 'astro:content';
import Layout from '../../layouts/Layout.astro';

const projects = await getCollection('projects');
const sortedProjects = projects.sort((a, b) => b.data.pubDate.valueOf() - a.data.pubDate.valueOf());
---

<Layout title="Portfolio">
  <main class="container mx-auto px-4 py-16">
    <h1 class="text-4xl font-bold mb-12 text-center">Projects</h1>
    <ul class="grid gap-8 md:grid-cols-2 lg:grid-cols-3">
      {sortedProjects.map(project => (
        <li class="bg-card rounded-lg shadow hover:shadow-lg transition">
          <a href={`/portfolio/${project.slug}`} class="block p-6">
            <h2 class="text-2xl font-semibold mb-2">{project.data.title}</h2>
            {project.data.featured && <span class="text-sm text-accent">(Featured)</span>}
          </a>
        </li>
      ))}
    </ul>
  </main>
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
  <article class="container mx-auto px-4 py-16 max-w-4xl">
    <h1 class="text-5xl font-bold mb-6">{project.data.title}</h1>
    <p class="text-xl text-muted-foreground mb-8">{project.data.description}</p>
    <p class="mb-4">Technologies: <span class="font-medium">{project.data.techs.join(', ')}</span></p>
    {project.data.link && <p class="mb-8"><a href={project.data.link} target="_blank" class="text-accent underline">View Project →</a></p>}
    {project.data.image && <img src={project.data.image} alt={project.data.title} class="w-full rounded-lg shadow-lg mb-8" />}
    <div class="prose prose-lg">
      <Content />
    </div>
  </article>
</Layout>
"#;

const STYLESHEET: &str = r#"@import "tailwindcss";

@theme {
  --color-background: oklch(0.98 0.01 240);
  --color-foreground: oklch(0.2 0.05 240);
  --color-card: oklch(0.95 0.01 240);
  --color-accent: oklch(0.6 0.2 280);
  --color-muted-foreground: oklch(0.5 0.02 240);
}

/* Optional: Add any custom CSS below */
"#;

const ASTRO_CONFIG: &str = r#"import { defineConfig } from 'astro/config';
import tailwindcss from '@tailwindcss/vite';

export default defineConfig({
  site: 'https://example.com',
  vite: {
    plugins: [tailwindcss()],
  },
  // Example other integrations (uncomment and install as needed)
  // integrations: [sitemap(), mdx()],
});
"#;

const README: &str = r#"# NeonMint

An Astro-based personal portfolio and blog with **content collections**, **dynamic routing**, and **Tailwind CSS v4** integration.

## Features
- Type-safe content collections for blog posts and projects
- Dynamic pages for blog and portfolio with Tailwind-styled layouts
- Modern Tailwind CSS v4 setup using the official Vite plugin
- Responsive design with utility classes applied throughout

## Getting Started

```bash
npm install
npm run dev
```

Tailwind CSS is configured via `src/styles/tailwind.css`. Customize themes using the `@theme` directive.

Visit example routes:
- http://localhost:4321/
- http://localhost:4321/blog
- http://localhost:4321/blog/example-post
- http://localhost:4321/portfolio
- http://localhost:4321/portfolio/example-project
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
        .file("src/styles/tailwind.css", STYLESHEET);

    let manifest = common::routes_and_scripts(manifest);
    let manifest = common::content_config(manifest);

    let package = common::package_json(json!({
        "astro": "^5.0.0",
        "@tailwindcss/vite": "^4.0.0",
        "tailwindcss": "^4.0.0",
    }))?;

    Ok(manifest
        .file(".gitignore", common::GITIGNORE)
        .file("package.json", package)
        .file("astro.config.mjs", ASTRO_CONFIG)
        .file("README.md", README)
        .file("tsconfig.json", common::tsconfig_json()?))
}
