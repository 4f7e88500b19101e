//! Built-in diagrams: the starting document and the examples gallery

/// Diagram loaded into every new session
pub const DEFAULT_DIAGRAM: &str = r#"@startuml
actor User
participant "Chat Panel" as Chat
participant "Code Panel" as Code
participant "Render Panel" as Render

User -> Chat : Type message
Chat -> User : AI replies
Chat -> Code: AI Edits diagram code
User -> Code : Manually Edit diagram code
Code -> Render : Automatically update diagram
@enduml"#;

/// A named example the user can load into the editor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiagramExample {
    pub title: &'static str,
    pub code: &'static str,
}

/// Gallery examples in display order
pub const EXAMPLES: &[DiagramExample] = &[
    DiagramExample {
        title: "JSON Diagram",
        code: r#"@startjson
{
  "title": "Pizza Ordering Workflow",
  "actors": ["Customer", "PizzaApp", "PizzaChef", "DeliveryDriver"],
  "steps": [
    { "from": "Customer", "to": "PizzaApp", "action": "Order Pineapple Pizza" },
    { "from": "PizzaApp", "to": "PizzaChef", "action": "Make Pizza (sigh)" },
    { "from": "PizzaChef", "to": "DeliveryDriver", "action": "Hand Over Pizza" },
    { "from": "DeliveryDriver", "to": "Customer", "action": "Deliver with Judgement" }
  ]
}

@endjson"#,
    },
    DiagramExample {
        title: "AWS Serverless API",
        code: r#"@startuml Serverless API
' from https://github.com/awslabs/aws-icons-for-plantuml/blob/main/examples/Serverless%20API.puml

!define AWSPuml https://raw.githubusercontent.com/awslabs/aws-icons-for-plantuml/v18.0/dist
!include AWSPuml/AWSCommon.puml
!include AWSPuml/AWSExperimental.puml
!include AWSPuml/ApplicationIntegration/APIGateway.puml
!include AWSPuml/Compute/Lambda.puml
!include AWSPuml/Database/DynamoDB.puml
!include AWSPuml/General/Client.puml
!include AWSPuml/Groups/AWSCloud.puml
!include AWSPuml/Storage/SimpleStorageService.puml

' Groups are rectangles with a custom style using stereotype - need to hide
hide stereotype
skinparam linetype ortho
skinparam rectangle {
    BorderColor transparent
}

rectangle "$ClientIMG()\nClient" as client
AWSCloudGroup(cloud){
  rectangle "$APIGatewayIMG()\nAmazon API\nGateway" as api
  rectangle "$LambdaIMG()\nAWS Lambda\n" as lambda
  rectangle "$DynamoDBIMG()\nAmazon DynamoDB\n" as dynamodb
  rectangle "$SimpleStorageServiceIMG()\nAmazon S3" as s3
  rectangle "$LambdaIMG()\nAWS Lambda" as trigger

  client -right-> api: <$Callout_1>\n
  api -right-> lambda: <$Callout_2>\n
  lambda -right-> dynamodb: <$Callout_3>\n
  api -[hidden]down-> s3
  client -right-> s3: <$Callout_4>
  s3 -right-> trigger: <$Callout_5>\n
  trigger -[hidden]up-> lambda
  trigger -u-> dynamodb: <$Callout_6>\n
}
@enduml"#,
    },
    DiagramExample {
        title: "Class diagram",
        code: r#"@startuml
hide empty members

abstract class AbstractAgent {
  + perceive()
  + act()
  + learn()
}

interface Environment {
  + sense()
  + respond()
}

interface KnowledgeBase {
  + store()
  + retrieve()
}

Environment <|-- PhysicalEnvironment
Environment <|-- DigitalEnvironment

abstract class AgentCore {
  + processInputs()
  + generateActions()
}

class AI_Agent {
  + name: String
  + id: String
  + executeTask(task: Task)
}

class Task {
  + description: String
  + execute()
}

AI_Agent -- Task : performs
AI_Agent -- KnowledgeBase : interacts with
AbstractAgent <|-- AI_Agent
AgentCore *-- AbstractAgent

class Memory {
  + capacity: int
  + storeKnowledge(knowledge: Object)
}

KnowledgeBase *-- Memory

note "The AI_Agent represents an intelligent entity\nthat can interact with environments and execute tasks." as AgentNote
AgentNote -- AI_Agent

package Environment_Types <<Environment>> {
  PhysicalEnvironment --() Robot
  DigitalEnvironment --() Chatbot
}

class Robot {
  + move()
  + senseSurroundings()
}

class Chatbot {
  + converse(input: String)
  + provideAnswer(question: String)
}

@enduml"#,
    },
    DiagramExample {
        title: "Sequence Diagram",
        code: r#"@startuml
title "File Upload and Processing Workflow"

actor User
participant Browser
participant AppServer
participant FileService
participant ProcessingQueue
participant WorkerService
participant NotificationService

== User Login ==
User -> Browser : Open Login Page
Browser -> AppServer : Submit Credentials
AppServer --> Browser : Return Auth Token
note over User, Browser : User is authenticated

== File Upload ==
User -> Browser : Select File for Upload
Browser -> AppServer : Send File (with Auth Token)
AppServer -> FileService : Store File
note over FileService : File stored successfully
FileService --> AppServer : File Location

== Queue for Processing ==
AppServer -> ProcessingQueue : Add File to Queue
note over ProcessingQueue : Queued for processing
ProcessingQueue --> AppServer : Acknowledgment

== File Processing ==
WorkerService -> ProcessingQueue : Poll for File
ProcessingQueue --> WorkerService : Provide File Details
WorkerService -> FileService : Download File
WorkerService -> WorkerService : Process File
WorkerService -> FileService : Upload Processed Result
FileService --> WorkerService"#,
    },
    DiagramExample {
        title: "State Diagram",
        code: r#"@startuml
state choiceOrderType <<choice>>
state forkProcessOrder <<fork>>
state joinComplete <<join>>
state endSuccess <<end>>
state CancelOrder <<end>>

[*] --> choiceOrderType : Start

choiceOrderType --> forkProcessOrder : If valid order
choiceOrderType --> CancelOrder : If order canceled
choiceOrderType --> endSuccess : If no items selected

forkProcessOrder ---> PaymentProcessing : Process Payment
forkProcessOrder --> InventoryCheck : Check Inventory

PaymentProcessing --> joinComplete : Payment Successful
PaymentProcessing --> CancelOrder : Payment Failed

InventoryCheck --> joinComplete : Stock Available
InventoryCheck --> CancelOrder : Out of Stock

joinComplete --> [*] : Order Complete
@enduml"#,
    },
    DiagramExample {
        title: "Entity Relationships",
        code: r#"@startuml
entity "User" {
  * user_id : UUID
  * name : String
  * email : String
  * password : String
}

entity "Order" {
  * order_id : UUID
  * order_date : Date
  * total_amount : Decimal
}

entity "Product" {
  * product_id : UUID
  * name : String
  * description : String
  * price : Decimal
  * stock_quantity : Integer
}

entity "OrderItem" {
  * order_item_id : UUID
  * quantity : Integer
  * subtotal : Decimal
}

entity "Category" {
  * category_id : UUID
  * name : String
}

User ||--o{ Order : "places"
Order ||--o{ OrderItem : "contains"
Product ||--o{ OrderItem : "is part of"
Category ||--o{ Product : "classifies"

note "Users can place multiple orders.\nEach order contains multiple items.\nProducts belong to categories." as Description
Description -[hidden] User

@enduml"#,
    },
];

/// Look up an example by its gallery title
pub fn find_example(title: &str) -> Option<&'static DiagramExample> {
    EXAMPLES.iter().find(|example| example.title == title)
}
