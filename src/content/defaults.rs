//! Built-in content used when the page carries none of its own.

use super::{
	Accomplishment, GridSpan, Profile, Project, Settings, SiteContent, SkillNode, SocialLink,
	Testimonial,
};

const TILE_DESCRIPTION: &str = "A milestone in professional development and technical expertise.";

/// CC0 sample clip standing in for a recorded project walkthrough.
const DEMO_CLIP: &str = "https://interactive-examples.mdn.mozilla.net/media/cc0-videos/flower.mp4";

fn strings(items: &[&str]) -> Vec<String> {
	items.iter().map(|s| s.to_string()).collect()
}

fn skill(id: &str, name: &str, skills: &[&str], x: f64, y: f64, connections: &[&str]) -> SkillNode {
	SkillNode {
		id: id.into(),
		name: name.into(),
		skills: strings(skills),
		x,
		y,
		connections: strings(connections),
	}
}

fn default_skills() -> Vec<SkillNode> {
	vec![
		skill(
			"ai-ml",
			"AI / Machine Learning",
			&[
				"Python",
				"TensorFlow",
				"PyTorch",
				"LLM Integration",
				"Model Fine-tuning",
				"EDA",
			],
			10.0,
			35.0,
			&["data-eng"],
		),
		skill(
			"data-eng",
			"Data Engineering",
			&["PostgreSQL", "TimescaleDB", "Kafka", "Spark", "Pandas", "Polars"],
			28.0,
			15.0,
			&["observability", "fullstack"],
		),
		skill(
			"fullstack",
			"Full-Stack Development",
			&["HTML/CSS", "JavaScript", "React", "Node.js", "REST APIs"],
			50.0,
			30.0,
			&["devops", "systems"],
		),
		skill(
			"devops",
			"DevOps & Production",
			&["Docker", "Kubernetes", "Nginx", "CI/CD", "AWS"],
			75.0,
			20.0,
			&[],
		),
		skill(
			"observability",
			"Observability",
			&["Grafana", "Prometheus", "Metrics & Alerting", "Logs/Tracing"],
			30.0,
			70.0,
			&[],
		),
		skill(
			"systems",
			"Systems Engineering",
			&["Linux", "Bash", "Networking", "Security Basics", "Packaging"],
			70.0,
			75.0,
			&["soft"],
		),
		skill(
			"soft",
			"Soft Skills",
			&["Leadership", "Communication", "Resilience", "Curiosity"],
			85.0,
			50.0,
			&[],
		),
	]
}

fn default_projects() -> Vec<Project> {
	vec![
		Project {
			id: 1,
			name: "AI-Powered Analytics Platform".into(),
			role: "Lead Full-Stack Engineer".into(),
			tech_stack: strings(&["React", "Python", "TensorFlow", "PostgreSQL", "Docker"]),
			summary: "End-to-end analytics platform with ML-driven insights.".into(),
			highlights: strings(&[
				"Reduced query times by 60% through optimized data pipelines",
				"Natural language queries backed by a custom LLM",
				"Deployed on Kubernetes with 99.9% uptime",
			]),
			github_card: false,
			demo_url: Some(DEMO_CLIP.into()),
		},
		Project {
			id: 2,
			name: "Real-Time Data Streaming System".into(),
			role: "Data Engineering Architect".into(),
			tech_stack: strings(&["Kafka", "Spark", "TimescaleDB", "Grafana", "AWS"]),
			summary: "Streaming infrastructure processing 100M+ events daily.".into(),
			highlights: strings(&[
				"Sub-second latency for real-time processing",
				"Monitoring with Prometheus and Grafana",
				"Automated deployment through CI/CD pipelines",
			]),
			github_card: false,
			demo_url: None,
		},
		Project {
			id: 3,
			name: "DevOps Automation Suite".into(),
			role: "DevOps Lead".into(),
			tech_stack: strings(&["Kubernetes", "Docker", "GitHub Actions", "Nginx", "Terraform"]),
			summary: "Automated deployment system cutting release times from days to hours.".into(),
			highlights: strings(&[
				"85% fewer deployment errors with automated testing",
				"Blue-green deployment strategies",
				"Centralised logging and alerting",
			]),
			github_card: false,
			demo_url: None,
		},
		Project {
			id: 4,
			name: "Machine Learning Operations Platform".into(),
			role: "ML Engineer & Platform Architect".into(),
			tech_stack: strings(&["PyTorch", "Kedro", "MLflow", "FastAPI", "Redis"]),
			summary: "MLOps platform for rapid model deployment and experimentation.".into(),
			highlights: strings(&[
				"3x faster training with distributed compute",
				"Automated model versioning and rollback",
				"Built-in A/B testing of model variants",
			]),
			github_card: false,
			demo_url: None,
		},
		Project {
			id: 5,
			name: "View More on GitHub".into(),
			role: "Explore Additional Projects".into(),
			tech_stack: Vec::new(),
			summary: "More projects, open-source contributions and code samples.".into(),
			highlights: strings(&[
				"Repositories across a range of technologies",
				"Contributions to open-source projects",
				"Experiments and code samples",
			]),
			github_card: true,
			demo_url: None,
		},
	]
}

fn tile(id: u32, url: &str, title: &str, cols: u8, rows: u8) -> Accomplishment {
	Accomplishment {
		id,
		url: url.into(),
		title: title.into(),
		description: TILE_DESCRIPTION.into(),
		date: "January 2026".into(),
		organization: "Professional Institute".into(),
		span: GridSpan { cols, rows },
	}
}

fn default_accomplishments() -> Vec<Accomplishment> {
	vec![
		tile(
			1,
			"https://images.unsplash.com/photo-1766722906733-609eebf3b63a?w=800&h=600&fit=crop",
			"AWS Certified Solutions Architect",
			2,
			2,
		),
		tile(
			2,
			"https://images.unsplash.com/photo-1560523159-94c9d18bcf27?w=600&h=600&fit=crop",
			"Tech Conference Speaker",
			1,
			1,
		),
		tile(
			3,
			"https://images.unsplash.com/photo-1739298061707-cefee19941b7?w=600&h=600&fit=crop",
			"Team Leadership Award",
			1,
			1,
		),
		tile(
			4,
			"https://images.unsplash.com/photo-1649451844813-3130d6f42f8a?w=600&h=800&fit=crop",
			"Hackathon Winner 2025",
			1,
			2,
		),
		tile(
			5,
			"https://images.unsplash.com/photo-1767595789539-cd012af80914?w=600&h=600&fit=crop",
			"Master's Degree in Computer Science",
			1,
			1,
		),
		tile(
			6,
			"https://images.unsplash.com/photo-1758691736067-b309ee3ef7b9?w=800&h=600&fit=crop",
			"Professional Training Certification",
			2,
			1,
		),
	]
}

fn default_testimonials() -> Vec<Testimonial> {
	vec![
		Testimonial {
			id: 1,
			quote: "An exceptional engineer with a rare combination of technical depth and \
			        leadership ability. Their work on our ML infrastructure transformed how we \
			        deploy models at scale."
				.into(),
			name: "Dr. Sarah Johnson".into(),
			role: "Senior Lecturer, Computer Science".into(),
			company: "University of Technology".into(),
			image_url: "https://images.unsplash.com/photo-1758685734503-58a8accc24e8?w=400&h=400&fit=crop"
				.into(),
			linkedin_url: "#".into(),
		},
		Testimonial {
			id: 2,
			quote: "During their internship, they demonstrated initiative and technical \
			        excellence far beyond their experience level. A natural problem solver who \
			        consistently delivers high-quality work."
				.into(),
			name: "Emma Rodriguez".into(),
			role: "Intern Supervisor & Tech Lead".into(),
			company: "DataStream Analytics".into(),
			image_url: "https://images.unsplash.com/photo-1584940121819-1883a5d3b0bd?w=400&h=400&fit=crop"
				.into(),
			linkedin_url: "#".into(),
		},
	]
}

fn link(id: &str, label: &str, url: &str) -> SocialLink {
	SocialLink {
		id: id.into(),
		label: label.into(),
		url: url.into(),
	}
}

fn default_social() -> Vec<SocialLink> {
	vec![
		link(
			"linkedin",
			"LinkedIn",
			"https://www.linkedin.com/in/mohammad-habib-617404185/",
		),
		link("github", "GitHub", "https://github.com/habibmohammad35"),
		link("gmail", "Gmail", "mailto:habibmohammad35@gmail.com"),
	]
}

impl Default for SiteContent {
	fn default() -> Self {
		Self {
			profile: Profile {
				name: "Your Name Here".into(),
				initials: "YN".into(),
				title: "Full Stack Engineer & Data Specialist".into(),
				about: "A short introduction goes here.".into(),
				portrait_url:
					"https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=800&h=800&fit=crop"
						.into(),
				cv_url: None,
			},
			skills: default_skills(),
			projects: default_projects(),
			accomplishments: default_accomplishments(),
			testimonials: default_testimonials(),
			social: default_social(),
			settings: Settings::default(),
		}
	}
}
