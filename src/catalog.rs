use crate::model::{Post, PostCollection};

/// 文章目录数据源
///
/// 仅暴露一个查询能力；目录在进程生命周期内不可变，
/// 每次调用返回相同顺序的同一批文章。
pub trait Catalog: Send + Sync {
    /// 返回完整的目录快照
    fn list_posts(&self) -> PostCollection;
}

/// 内存目录，进程启动时用固定数据集构造一次。
///
/// 背后可以换成数据库或 CMS，接口不变。
#[derive(Debug, Clone)]
pub struct MemoryCatalog {
    posts: PostCollection,
}

impl MemoryCatalog {
    pub fn new(posts: PostCollection) -> Self {
        Self { posts }
    }

    /// 构造内置的四篇示例文章
    pub fn seeded() -> Self {
        Self::new(vec![
            Post {
                id: 1,
                title: "Getting Started with Next.js".to_string(),
                content: "Next.js is a powerful React framework that makes building full-stack web applications simple and efficient. It provides features like server-side rendering, static site generation, and API routes out of the box. In this post, we'll explore the basics of setting up a Next.js project and understanding its core concepts. We'll cover topics like file-based routing, data fetching methods, and deployment strategies. Whether you're new to React or an experienced developer, Next.js offers a great developer experience with excellent performance optimizations.".to_string(),
                author: "John Doe".to_string(),
                created_at: "2024-01-15T10:00:00Z".to_string(),
                excerpt: "Learn the fundamentals of Next.js and how to build modern web applications with this powerful React framework.".to_string(),
            },
            Post {
                id: 2,
                title: "Testing React Components with Jest".to_string(),
                content: "Testing is a crucial part of building reliable React applications. Jest is a popular testing framework that works great with React components. In this comprehensive guide, we'll learn how to write effective unit tests for React components using Jest and React Testing Library. We'll cover topics like component rendering, user interactions, mocking dependencies, and testing asynchronous operations. By the end of this post, you'll have a solid understanding of how to test your React components effectively and maintain high code quality.".to_string(),
                author: "Jane Smith".to_string(),
                created_at: "2024-01-20T14:30:00Z".to_string(),
                excerpt: "A comprehensive guide to testing React components using Jest and React Testing Library for better code quality.".to_string(),
            },
            Post {
                id: 3,
                title: "TypeScript Best Practices for React".to_string(),
                content: "TypeScript adds static typing to JavaScript, making it easier to build large-scale applications with fewer bugs. When combined with React, TypeScript provides excellent developer experience with better IntelliSense, error catching, and refactoring capabilities. In this post, we'll explore TypeScript best practices specifically for React development. We'll cover type definitions for props, state management, event handlers, and common patterns. You'll learn how to write more maintainable and robust React code with TypeScript.".to_string(),
                author: "Mike Johnson".to_string(),
                created_at: "2024-01-25T09:15:00Z".to_string(),
                excerpt: "Learn TypeScript best practices for React development to write more maintainable and robust applications.".to_string(),
            },
            Post {
                id: 4,
                title: "Building Accessible Web Applications".to_string(),
                content: "Web accessibility is not just a legal requirement but also a moral obligation to ensure that everyone can use your applications. In this post, we'll explore how to build accessible React applications that work for users with disabilities. We'll cover topics like semantic HTML, ARIA attributes, keyboard navigation, screen reader compatibility, and color contrast. You'll learn practical techniques and tools to test and improve the accessibility of your web applications.".to_string(),
                author: "Sarah Wilson".to_string(),
                created_at: "2024-01-30T16:45:00Z".to_string(),
                excerpt: "Essential guidelines and techniques for building accessible React applications that work for all users.".to_string(),
            },
        ])
    }
}

impl Catalog for MemoryCatalog {
    fn list_posts(&self) -> PostCollection {
        self.posts.clone()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_seeded_ids_are_unique() {
        let posts = MemoryCatalog::seeded().list_posts();
        let ids: HashSet<i64> = posts.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), posts.len(), "id 在快照内应唯一");
    }

    #[test]
    fn test_seeded_fields_are_valid() {
        for post in MemoryCatalog::seeded().list_posts() {
            assert!(!post.title.is_empty());
            assert!(!post.content.is_empty());
            assert!(!post.author.is_empty());
            assert!(!post.excerpt.is_empty());
            post.created_date().expect("时间戳解析失败");
        }
    }

    #[test]
    fn test_list_posts_order_is_stable() {
        let catalog = MemoryCatalog::seeded();
        let first = catalog.list_posts();
        let second = catalog.list_posts();
        assert_eq!(first, second, "两次查询应返回相同顺序的同一批文章");
        assert_eq!(first.len(), 4);
    }
}
