//! Built-in catalog tables used when no catalog file is configured or the
//! configured file cannot be loaded.

/// Job title -> skill phrases, in ranking tie-break order.
pub(super) const JOB_SKILLS: &[(&str, &[&str])] = &[
    (
        "Data Scientist",
        &[
            "python", "sql", "data visualization", "statistics", "analytics", "data analysis",
            "pandas", "numpy", "sklearn", "tensorflow", "visualization", "jupyter", "ai",
            "artificial intelligence", "algorithms", "statistical", "big data", "data mining",
            "database", "deep learning", "nlp", "tableau", "power bi", "machine learning", "r",
            "spss", "matlab", "data science",
        ],
    ),
    (
        "Software Engineer",
        &[
            "software", "programming", "development", "java", "python", "javascript", "code",
            "algorithm", "api", "web", "full stack", "backend", "frontend", "app", "mobile",
            "cloud", "github", "git", "debugging", "testing", "agile", "software design",
            "object oriented", "oop", "react", "angular", "node", "c++", "c#", "php", ".net",
            "ruby", "scala", "rust", "go", "azure", "aws", "devops", "microservices", "rest api",
            "graphql",
        ],
    ),
    (
        "Product Manager",
        &[
            "product", "management", "strategy", "roadmap", "agile", "scrum", "user experience",
            "prioritization", "stakeholder", "business", "customer", "market research", "feature",
            "specification", "project management", "competitive analysis", "product development",
            "launch", "requirements", "backlog", "jira", "product owner", "mvp", "user stories",
            "product vision", "a/b testing", "product metrics", "okrs", "sprint planning",
            "user feedback", "product lifecycle",
        ],
    ),
    (
        "UX Designer",
        &[
            "user experience", "wireframing", "prototyping", "interaction design",
            "usability testing", "design thinking", "Figma", "Adobe XD", "UI components",
            "mobile design", "responsive design", "human-centered design",
            "information architecture", "accessibility", "web design", "app development",
            "navigation design",
        ],
    ),
    (
        "DevOps Engineer",
        &[
            "devops", "ci/cd", "pipeline", "aws", "cloud", "docker", "kubernetes",
            "infrastructure", "linux", "automation", "jenkins", "terraform", "ansible",
            "monitoring", "deployment", "configuration", "security", "networking", "containers",
            "microservices", "git", "continuous integration", "azure", "gcp", "prometheus",
            "grafana", "puppet", "chef", "bash", "scripting", "nginx", "apache",
        ],
    ),
    (
        "Chef",
        &[
            "culinary", "cooking", "chef", "kitchen", "food", "recipe", "cuisine", "baking",
            "pastry", "catering", "restaurant", "menu", "sous chef", "head chef",
            "executive chef", "food preparation", "gastronomy", "hospitality", "nutrition",
            "food safety", "culinary arts", "buffet", "food service", "meal planning",
            "fine dining", "saute", "grill", "taste", "flavor", "ingredients", "dietary",
            "butchery", "garde manger", "banquet",
        ],
    ),
    (
        "Pastry Chef",
        &[
            "desserts", "baking", "patisserie", "confectionery", "sweet treats", "pastry arts",
            "cake decorating", "fondant", "ganache", "whisking", "meringue", "custard", "glazing",
            "sugar work", "chocolate tempering", "artisan baking", "viennoiserie", "bread-making",
            "laminate dough", "torte", "proofing", "buttercream", "caramelization",
            "flavor pairing", "plating", "food styling", "pastry techniques", "garde manger",
            "dough preparation", "buffet", "banquet", "hospitality", "culinary arts",
            "food service", "meal planning", "fine dining", "ingredients", "nutrition",
            "food safety", "gastronomy", "menu creation", "executive pastry chef",
        ],
    ),
    (
        "Executive Chef",
        &[
            "menu creation", "kitchen management", "restaurant operations", "culinary leadership",
            "food safety", "staff training", "inventory control", "cost management",
            "fine dining", "gastronomy",
        ],
    ),
    (
        "Sous Chef",
        &[
            "food preparation", "team supervision", "kitchen coordination", "recipe execution",
            "menu development", "culinary techniques", "restaurant service", "flavor balancing",
        ],
    ),
    (
        "Garde Manger Chef",
        &[
            "cold dishes", "appetizers", "charcuterie", "salads", "plating", "buffet", "banquet",
            "food styling", "food presentation", "flavor pairing",
        ],
    ),
    (
        "Saucier Chef",
        &[
            "sauces", "stocks", "braising", "saute", "reduction", "flavor infusion", "garnishing",
            "culinary techniques",
        ],
    ),
    (
        "Private Chef",
        &[
            "custom meal planning", "exclusive dining", "nutrition", "dietary cooking",
            "personalized recipes", "high-end dining", "seasonal ingredients",
        ],
    ),
    (
        "Nutritionist Chef",
        &[
            "healthy cooking", "diet planning", "balanced meals", "nutritional science",
        ],
    ),
    (
        "Cruise Ship Chef",
        &[
            "international cuisine", "buffet service", "high-volume cooking",
            "cruise hospitality",
        ],
    ),
    (
        "Consultant Chef",
        &[
            "culinary consulting", "menu optimization", "restaurant efficiency",
            "food innovation", "business development",
        ],
    ),
    (
        "Marketing Manager",
        &[
            "marketing", "strategy", "brand", "social media", "market research", "campaigns",
            "digital marketing", "marketing strategy", "customer relations", "analytics",
            "advertising", "seo", "content marketing", "marketing automation", "branding",
            "marketing campaign", "email marketing", "lead generation", "content strategy",
            "marketing analytics", "google analytics", "ppc", "sem", "cro", "copywriting",
            "marketing communications", "public relations",
        ],
    ),
    (
        "Sales Representative",
        &[
            "sales", "business development", "customer acquisition", "account management",
            "negotiation", "client relations", "pipeline", "crm", "quotas", "leads",
            "prospecting", "sales strategy", "b2b", "b2c", "relationship management",
            "sales funnel", "closing deals", "sales pitch", "cold calling", "salesforce",
            "sales forecasting", "territory management", "customer success", "solution selling",
            "consultative selling", "sales presentations",
        ],
    ),
    (
        "Project Manager",
        &[
            "project management", "team leadership", "project planning", "stakeholder management",
            "budgeting", "agile", "scrum", "waterfall", "project delivery", "resource management",
            "timelines", "risk management", "pmp", "strategic planning", "jira", "ms project",
            "project coordination", "change management", "project scheduling",
            "project documentation", "requirements gathering", "issue tracking", "critical path",
            "status reporting", "project lifecycle", "kanban", "sprint planning",
        ],
    ),
    (
        "Financial Analyst",
        &[
            "financial analysis", "excel", "finance", "accounting", "reporting",
            "financial modeling", "forecasting", "budgeting", "investment", "valuation",
            "financial statements", "business analysis", "sap", "financial planning",
            "data analysis", "balance sheet", "income statement", "cash flow",
            "variance analysis", "profitability analysis", "p&l", "kpi reporting",
            "financial metrics", "equity research", "business intelligence",
        ],
    ),
    (
        "Accountant",
        &[
            "accounting", "bookkeeping", "financial reporting", "tax preparation", "quickbooks",
            "auditing", "cpa", "general ledger", "accounts payable", "accounts receivable",
            "reconciliation", "balance sheet", "income statement", "financial statements",
            "erp systems", "tax returns", "gaap", "fixed assets", "accruals", "journal entries",
            "month-end close", "payroll processing", "cash management", "cost accounting",
            "financial controls",
        ],
    ),
    (
        "Tax Accountant",
        &[
            "tax preparation", "tax compliance", "IRS regulations", "tax returns", "income tax",
            "corporate tax", "sales tax", "tax deductions", "audit defense", "tax laws",
            "estate tax", "financial statements", "GAAP", "tax strategy", "cost accounting",
        ],
    ),
    (
        "Auditor",
        &[
            "auditing", "internal controls", "financial compliance", "risk assessment",
            "forensic accounting", "fraud detection", "regulatory reporting", "audit procedures",
            "GAAP", "financial statements", "Sarbanes-Oxley", "account reconciliations",
        ],
    ),
    (
        "Forensic Accountant",
        &[
            "forensic accounting", "fraud investigation", "financial crime", "money laundering",
            "litigation support", "criminal investigations", "internal controls", "audit trails",
            "business valuation", "compliance auditing",
        ],
    ),
    (
        "Financial Accountant",
        &[
            "financial reporting", "balance sheet", "income statement", "GAAP", "IFRS",
            "general ledger", "financial analysis", "accounting software", "ERP systems",
            "financial controls", "month-end close", "fixed assets", "journal entries",
        ],
    ),
    (
        "Cost Accountant",
        &[
            "cost accounting", "budgeting", "variance analysis", "manufacturing costs",
            "profitability analysis", "inventory valuation", "activity-based costing",
            "cost estimation", "financial forecasting", "management accounting",
        ],
    ),
    (
        "Management Accountant",
        &[
            "financial planning", "strategic budgeting", "corporate finance", "cost analysis",
            "performance evaluation", "business strategy", "cash flow management",
            "profit and loss analysis", "investment analysis", "decision support",
        ],
    ),
    (
        "Payroll Accountant",
        &[
            "payroll processing", "salary calculations", "tax withholding", "employee benefits",
            "payroll compliance", "wage laws", "HR accounting", "tax filings",
            "account reconciliation", "cash management",
        ],
    ),
    (
        "Government Accountant",
        &[
            "public finance", "government budgeting", "federal accounting",
            "state financial regulations", "tax compliance", "grant accounting",
            "fund accounting", "GAO audits", "government contracts", "public sector finance",
        ],
    ),
    (
        "Investment Accountant",
        &[
            "investment reporting", "portfolio accounting", "financial instruments",
            "stock valuation", "hedge fund accounting", "risk assessment", "cash management",
            "bond accounting", "equity analysis", "fund administration",
        ],
    ),
    (
        "CPA (Certified Public Accountant)",
        &[
            "certification", "public accounting", "audit experience", "GAAP compliance",
            "tax advising", "financial analysis", "consulting", "industry regulations",
            "client accounting", "business finance",
        ],
    ),
    (
        "Legal Counsel",
        &[
            "legal", "law", "lawyer", "attorney", "legal research", "contract review",
            "client consultation", "case management", "dispute resolution", "negotiation",
            "legal compliance", "regulatory", "intellectual property", "litigation",
            "legal advice", "contracts", "legal documents", "legal analysis", "legal writing",
            "briefs", "counseling", "corporate law", "legal risk", "legal proceedings",
            "legal strategy",
        ],
    ),
    (
        "Agricultural Manager",
        &[
            "agriculture", "farming", "crop management", "agricultural operations",
            "soil science", "farm equipment", "livestock", "agronomy", "harvest", "irrigation",
            "sustainable farming", "agricultural research", "precision agriculture",
            "cultivation", "fertilizer", "pesticides", "farm management",
            "agricultural economics", "crop rotation", "farm equipment", "animal husbandry",
            "organic farming",
        ],
    ),
    (
        "Fashion Designer",
        &[
            "fashion", "design", "apparel", "garment", "textile", "cad", "trend analysis",
            "clothing", "collection", "fashion industry", "pattern making", "sketching",
            "sustainable fashion", "product development", "merchandising", "sewing",
            "fashion trends", "fashion marketing", "couture", "retail", "fashion illustration",
            "textiles", "fabric selection", "color coordination", "fashion shows",
        ],
    ),
    (
        "Graphic Designer",
        &[
            "visual design", "branding", "typography", "illustration", "logo design", "layout",
            "vector art", "color theory", "digital media", "adobe creative suite", "print design",
            "UI/UX", "composition", "marketing design", "packaging", "infographics",
            "motion graphics", "web design", "photo editing",
        ],
    ),
    (
        "Interior Designer",
        &[
            "space planning", "aesthetics", "home decor", "furniture design", "lighting",
            "color theory", "architecture", "floor planning", "sustainable design", "CAD",
            "3D modeling", "materials selection", "design psychology", "functional spaces",
            "renovation", "real estate styling", "commercial interiors",
        ],
    ),
    (
        "Industrial Designer",
        &[
            "product design", "ergonomics", "prototyping", "materials science",
            "manufacturing processes", "CAD", "engineering aesthetics", "branding",
            "mechanical design", "3D rendering", "sustainable production", "concept development",
            "usability testing", "consumer products", "innovation", "design research",
        ],
    ),
    (
        "Game Designer",
        &[
            "game mechanics", "level design", "storyboarding", "interactive storytelling",
            "UI/UX for gaming", "character design", "animation", "game engines", "3D modeling",
            "physics simulations", "world-building", "game testing", "sound design",
            "narrative development", "virtual environments", "art direction",
        ],
    ),
    (
        "Web Designer",
        &[
            "HTML", "CSS", "JavaScript", "responsive design", "user interface", "CMS",
            "SEO optimization", "front-end development", "wireframing", "animation",
            "color palettes", "page layout", "typography", "e-commerce design", "branding",
            "digital marketing", "web performance",
        ],
    ),
    (
        "Floral Designer",
        &[
            "floral design", "flower arrangement", "bouquet crafting", "wedding florals",
            "event styling", "botanical artistry", "color theory", "seasonal flowers",
            "plant care", "garden aesthetics", "centerpieces", "floral foam", "horticulture",
            "flower preservation", "floral installations", "floral retail", "floral trends",
            "sustainable floristry", "bridal bouquets", "corporate floral design",
            "floral sculpture", "greenery styling", "custom arrangements", "flower markets",
            "indoor plants",
        ],
    ),
];

/// Job title -> skill gaps shown as learning suggestions.
pub(super) const MISSING_SKILLS: &[(&str, &[&str])] = &[
    (
        "Data Scientist",
        &[
            "TensorFlow", "Big Data", "Cloud Platforms", "Deep Learning", "NLP",
        ],
    ),
    (
        "Software Engineer",
        &[
            "Kubernetes", "AWS", "CI/CD", "Microservices", "GraphQL",
        ],
    ),
    (
        "Product Manager",
        &[
            "Data Analysis", "Technical Knowledge", "Agile Certification", "Product Metrics",
        ],
    ),
    (
        "UX Designer",
        &[
            "Psychological Research", "AI Integration", "Voice UI Design", "Data Analytics",
        ],
    ),
    (
        "DevOps Engineer",
        &[
            "Kubernetes", "Terraform", "Cloud Architecture", "Security Automation",
        ],
    ),
    (
        "Chef",
        &[
            "Advanced Pastry", "International Cuisine", "Nutrition Science", "Menu Costing",
        ],
    ),
    (
        "Pastry Chef",
        &[
            "Advanced Baking", "Dessert Plating", "Sugar Crafting", "Chocolate Tempering",
        ],
    ),
    (
        "Executive Chef",
        &[
            "Menu Engineering", "Culinary Leadership", "Kitchen Operations", "Cost Control",
        ],
    ),
    (
        "Sous Chef",
        &[
            "Team Management", "Recipe Execution", "Kitchen Coordination", "Food Preparation",
        ],
    ),
    (
        "Garde Manger Chef",
        &[
            "Cold Dish Preparation", "Appetizer Crafting", "Charcuterie Techniques",
            "Food Styling",
        ],
    ),
    (
        "Private Chef",
        &[
            "Custom Meal Planning", "Exclusive Dining", "Dietary Adaptation",
            "Personalized Recipes",
        ],
    ),
    (
        "Nutritionist Chef",
        &[
            "Healthy Cooking", "Balanced Meals", "Diet Planning", "Nutritional Science",
        ],
    ),
    (
        "Cruise Ship Chef",
        &[
            "International Cuisine", "Buffet Management", "High-Volume Cooking",
            "Hospitality Operations",
        ],
    ),
    (
        "Consultant Chef",
        &[
            "Culinary Consulting", "Menu Optimization", "Restaurant Efficiency",
            "Food Innovation",
        ],
    ),
    (
        "Saucier Chef",
        &[
            "Sauce Creation", "Flavor Reduction", "Garnishing Techniques", "Culinary Infusion",
        ],
    ),
    (
        "Marketing Manager",
        &[
            "SEO", "Content Marketing", "Marketing Automation", "Analytics",
        ],
    ),
    (
        "Sales Representative",
        &[
            "Advanced Sales Techniques", "Industry Certifications", "Data Analysis",
        ],
    ),
    (
        "Project Manager",
        &[
            "Agile Methodologies", "Resource Optimization", "Strategic Planning",
        ],
    ),
    (
        "Financial Analyst",
        &[
            "Financial Modeling", "SAP", "Forecasting", "Data Visualization",
        ],
    ),
    (
        "Accountant",
        &[
            "CPA Certification", "ERP Systems", "Advanced Excel", "Financial Modeling",
        ],
    ),
    (
        "Legal Counsel",
        &[
            "Specialized Law Practice", "Negotiation", "Legal Tech Tools", "Dispute Resolution",
        ],
    ),
    (
        "Agricultural Manager",
        &[
            "Precision Agriculture", "AgriTech", "Sustainable Practices",
            "Supply Chain Management",
        ],
    ),
    (
        "Fashion Designer",
        &[
            "Sustainable Fashion", "3D Modeling", "Supply Chain", "E-commerce Integration",
        ],
    ),
    (
        "Graphic Designer",
        &[
            "Creative Direction", "Advanced Typography", "Marketing Strategy",
            "Data Visualization",
        ],
    ),
    (
        "Interior Designer",
        &[
            "Structural Design", "Real Estate Development", "Advanced CAD", "Building Codes",
        ],
    ),
    (
        "Industrial Designer",
        &[
            "Mechanical Engineering", "Material Chemistry", "Robotics Design",
            "Manufacturing Logistics",
        ],
    ),
    (
        "Game Designer",
        &[
            "AI Scripting", "3D Physics", "Advanced Animation", "Virtual Reality Development",
        ],
    ),
    (
        "Web Designer",
        &[
            "Cybersecurity", "Advanced JavaScript", "Database Management", "SEO Analytics",
        ],
    ),
    (
        "Floral Designer",
        &[
            "Advanced Flower Preservation", "Luxury Floral Branding", "Digital Floral Marketing",
            "3D Floral Sculpting", "Sustainable Floristry", "Business Management for Florists",
            "Wholesale Flower Sourcing", "Event Coordination", "Creative Concept Development",
            "Cross-disciplinary Design Integration", "AI-driven Floral Customization",
        ],
    ),
    (
        "Tax Accountant",
        &[
            "International Taxation", "Tax Law Interpretation", "Advanced Tax Strategy",
            "Cryptocurrency Tax Compliance",
        ],
    ),
    (
        "Auditor",
        &[
            "IT Auditing", "Cybersecurity Risk Assessment", "AI-driven Fraud Detection",
            "Government Regulatory Compliance",
        ],
    ),
    (
        "Forensic Accountant",
        &[
            "Blockchain Forensics", "Digital Financial Crime Investigation",
            "Legal Litigation Support", "Financial Profiling",
        ],
    ),
    (
        "Financial Accountant",
        &[
            "Integrated Reporting", "Financial Risk Management", "Predictive Analytics",
            "Advanced ERP Systems",
        ],
    ),
    (
        "Cost Accountant",
        &[
            "Lean Accounting", "Activity-Based Costing", "Advanced Budget Modeling",
            "Strategic Cost Reduction",
        ],
    ),
    (
        "Management Accountant",
        &[
            "Corporate Governance", "Behavioral Economics in Finance", "Leadership in Accounting",
            "Business Intelligence Tools",
        ],
    ),
    (
        "Payroll Accountant",
        &[
            "Payroll Tax Strategy", "HR Finance Integration", "Employee Compensation Analytics",
            "Automated Payroll Systems",
        ],
    ),
    (
        "Government Accountant",
        &[
            "Public Finance Transparency", "Federal Grant Reporting",
            "Municipal Finance Regulations", "Government Cost Allocation",
        ],
    ),
    (
        "Investment Accountant",
        &[
            "Portfolio Risk Analysis", "Hedge Fund Valuation",
            "Cryptocurrency Investment Accounting", "Global Securities Accounting",
        ],
    ),
    (
        "CPA (Certified Public Accountant)",
        &[
            "Advanced Advisory Services", "Public Trust Management",
            "Ethical Accounting Standards", "Cross-border Financial Regulations",
        ],
    ),
];

/// Job title -> hiring company names.
pub(super) const COMPANIES: &[(&str, &[&str])] = &[
    (
        "Data Scientist",
        &[
            "Analytics Co.",
        ],
    ),
    (
        "Software Engineer",
        &[
            "Tech Innovations",
        ],
    ),
    (
        "Product Manager",
        &[
            "Product Innovations Inc.",
        ],
    ),
    (
        "UX Designer",
        &[
            "Google", "Meta", "Microsoft", "Apple", "Amazon", "IBM", "Figma", "Adobe XD",
            "Spotify", "Salesforce",
        ],
    ),
    (
        "DevOps Engineer",
        &[
            "Cloud Systems Inc.",
        ],
    ),
    (
        "Chef",
        &[
            "Culinary Innovations",
        ],
    ),
    (
        "Pastry Chef",
        &[
            "Le Cordon Bleu",
        ],
    ),
    (
        "Executive Chef",
        &[
            "The Ritz-Carlton",
        ],
    ),
    (
        "Sous Chef",
        &[
            "The Savoy",
        ],
    ),
    (
        "Garde Manger Chef",
        &[
            "Hotel Banquets", "Cruise Line Dining",
        ],
    ),
    (
        "Private Chef",
        &[
            "Celebrity Residences", "Private Estates",
        ],
    ),
    (
        "Nutritionist Chef",
        &[
            "Hospitals", "Wellness Resorts",
        ],
    ),
    (
        "Cruise Ship Chef",
        &[
            "Royal Caribbean", "Carnival Cruise Line",
        ],
    ),
    (
        "Consultant Chef",
        &[
            "Restaurant Consulting Firms", "Hospitality Groups",
        ],
    ),
    (
        "Saucier Chef",
        &[
            "French Restaurants", "Steakhouses",
        ],
    ),
    (
        "Marketing Manager",
        &[
            "Growth Strategies Inc.",
        ],
    ),
    (
        "Sales Representative",
        &[
            "Sales Experts Ltd.",
        ],
    ),
    (
        "Project Manager",
        &[
            "Enterprise Solutions",
        ],
    ),
    (
        "Financial Analyst",
        &[
            "Capital Management",
        ],
    ),
    (
        "Accountant",
        &[
            "Financial Solutions",
        ],
    ),
    (
        "Legal Counsel",
        &[
            "Corporate Legal Partners",
        ],
    ),
    (
        "Agricultural Manager",
        &[
            "FarmTech Solutions",
        ],
    ),
    (
        "Fashion Designer",
        &[
            "Trendsetter Apparel",
        ],
    ),
    (
        "Graphic Designer",
        &[
            "Adobe", "Canva",
        ],
    ),
    (
        "Interior Designer",
        &[
            "IKEA", "Gensler",
        ],
    ),
    (
        "Industrial Designer",
        &[
            "Tesla", "IDEO",
        ],
    ),
    (
        "Game Designer",
        &[
            "Nintendo", "Ubisoft",
        ],
    ),
    (
        "Floral Designer",
        &[
            "Farmgirl Flowers",
        ],
    ),
    (
        "Web Designer",
        &[
            "Wix", "Squarespace", "WordPress", "Shopify", "Google",
        ],
    ),
    (
        "Tax Accountant",
        &[
            "Deloitte",
        ],
    ),
    (
        "Auditor",
        &[
            "PwC (PricewaterhouseCoopers)",
        ],
    ),
    (
        "Forensic Accountant",
        &[
            "Kroll",
        ],
    ),
    (
        "Financial Accountant",
        &[
            "EY (Ernst & Young)",
        ],
    ),
    (
        "Cost Accountant",
        &[
            "Caterpillar Inc.",
        ],
    ),
    (
        "Management Accountant",
        &[
            "IBM",
        ],
    ),
    (
        "Payroll Accountant",
        &[
            "ADP",
        ],
    ),
    (
        "Government Accountant",
        &[
            "U.S. Department of the Treasury",
        ],
    ),
    (
        "Investment Accountant",
        &[
            "BlackRock",
        ],
    ),
    (
        "CPA (Certified Public Accountant)",
        &[
            "AICPA (American Institute of CPAs)",
        ],
    ),
];

